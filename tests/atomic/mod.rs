/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/


mod cas_property_tests;
mod concurrent_tests;
mod integer_tests;
mod trait_tests;
