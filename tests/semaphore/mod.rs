/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

mod bound_tests;
#[cfg(target_os = "linux")]
mod named_tests;
