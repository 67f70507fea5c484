// crates/engine/src/owner.rs
//! Owner column: numeric UID to user name.

use hashbrown::HashMap;
use std::ffi::CStr;

/// Maps a numeric UID to the name shown in the OWNER column.
///
/// Implementations never fail: an unknown UID is rendered as its decimal
/// form.
pub trait OwnerResolver {
    fn resolve(&self, uid: u32) -> String;
}

/// Resolver backed by the system user database (`getpwuid_r`).
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemOwners;

impl OwnerResolver for SystemOwners {
    fn resolve(&self, uid: u32) -> String {
        lookup_user_name(uid).unwrap_or_else(|| uid.to_string())
    }
}

const INITIAL_PASSWD_BUF: usize = 1024;
const MAX_PASSWD_BUF: usize = 1 << 20;

fn lookup_user_name(uid: u32) -> Option<String> {
    let mut buf: Vec<libc::c_char> = vec![0; INITIAL_PASSWD_BUF];
    loop {
        // SAFETY: an all-zero `passwd` is a valid value of the struct; it is
        // only read after getpwuid_r reports success.
        let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
        let mut result: *mut libc::passwd = std::ptr::null_mut();
        // SAFETY: every pointer refers to live, correctly sized storage.
        let rc = unsafe {
            libc::getpwuid_r(
                uid,
                &mut pwd,
                buf.as_mut_ptr(),
                buf.len(),
                &mut result,
            )
        };
        if rc == libc::ERANGE && buf.len() < MAX_PASSWD_BUF {
            buf.resize(buf.len() * 2, 0);
            continue;
        }
        if rc != 0 || result.is_null() || pwd.pw_name.is_null() {
            log::trace!("no passwd entry for uid {uid} (rc={rc})");
            return None;
        }
        // SAFETY: pw_name points into `buf` and is NUL terminated.
        let name = unsafe { CStr::from_ptr(pwd.pw_name) };
        return Some(name.to_string_lossy().into_owned());
    }
}

/// Resolver with a fixed UID table, for deterministic output.
#[derive(Clone, Debug, Default)]
pub struct FixedOwners {
    names: HashMap<u32, String>,
}

impl FixedOwners {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, uid: u32, name: impl Into<String>) -> Self {
        self.names.insert(uid, name.into());
        self
    }
}

impl OwnerResolver for FixedOwners {
    fn resolve(&self, uid: u32) -> String {
        self.names
            .get(&uid)
            .cloned()
            .unwrap_or_else(|| uid.to_string())
    }
}
