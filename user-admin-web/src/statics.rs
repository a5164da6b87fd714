use std::mem::MaybeUninit;

use serde::{Deserialize, Serialize};

/// The global config.
///
/// This instance always lives for the lifetime of the program.
///
/// # Safety
///
/// A `Config` instance is always expected to have a `'static` lifetime. Some
/// methods make use of this assumption to provide safe methods.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    // We never need to resize these, so `Box<str>` saves us 1 * usize of space.
    pub api_base: Box<str>,
    pub mountpoint: Box<str>,
}

impl Config {
    /// Returns the base URL of the users endpoint.
    #[inline]
    pub fn api_base(&self) -> &'static str {
        &self.static_ref().api_base
    }

    /// Returns the id of the element the app mounts into.
    #[inline]
    pub fn mountpoint(&self) -> &str {
        &self.mountpoint
    }

    /// Converts a `&Config` reference into a `&'static Config` reference.
    #[inline]
    fn static_ref(&self) -> &'static Self {
        // SAFETY: The caller must guarantee that `self` has a `'static` lifetime.
        unsafe { std::mem::transmute(self) }
    }
}

static mut CONFIG: MaybeUninit<Config> = MaybeUninit::uninit();

#[inline]
pub fn config() -> &'static Config {
    // SAFETY: `set_config` must have been called at the start of the program.
    // CONFIG is initialized.
    unsafe { CONFIG.assume_init_ref() }
}

/// Sets the config.
///
/// # Safety
///
/// While this function executes there must be no references to the config. A
/// reference can be obtained by calling [`config`]. You must also only call
/// this function once in the lifetime of the program.
#[inline]
pub(super) unsafe fn set_config(config: Config) {
    CONFIG.write(config);
}
