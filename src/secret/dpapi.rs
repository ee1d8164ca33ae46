//! Windows Data Protection API protector
//!
//! Blobs are bound to the current user account and cannot be decrypted by
//! another user or on another machine.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use log::debug;
use std::ptr;

use windows_sys::Win32::Foundation::LocalFree;
use windows_sys::Win32::Security::Cryptography::{
    CryptProtectData, CryptUnprotectData, CRYPTPROTECT_UI_FORBIDDEN, CRYPT_INTEGER_BLOB,
};

use crate::error::{Result, TfeError};

use super::{SecretProtector, StoredToken};

/// DPAPI-backed protector (current user scope)
#[derive(Debug, Default, Clone, Copy)]
pub struct DpapiProtector;

impl SecretProtector for DpapiProtector {
    fn name(&self) -> &'static str {
        "dpapi"
    }

    fn protect(&self, plaintext: &str) -> Result<StoredToken> {
        if plaintext.is_empty() {
            return Ok(StoredToken::Plain(String::new()));
        }
        let blob = crypt(plaintext.as_bytes(), Direction::Protect)?;
        debug!("Protected token into {} byte blob", blob.len());
        Ok(StoredToken::Protected {
            protected: BASE64.encode(blob),
        })
    }

    fn unprotect(&self, stored: &StoredToken) -> Result<String> {
        match stored {
            StoredToken::Plain(token) => Ok(token.clone()),
            StoredToken::Protected { protected } => {
                let blob = BASE64
                    .decode(protected)
                    .map_err(|e| TfeError::Secret(format!("Corrupt protected token: {}", e)))?;
                let clear = crypt(&blob, Direction::Unprotect)?;
                String::from_utf8(clear)
                    .map_err(|e| TfeError::Secret(format!("Token is not valid UTF-8: {}", e)))
            }
        }
    }
}

enum Direction {
    Protect,
    Unprotect,
}

fn crypt(input: &[u8], direction: Direction) -> Result<Vec<u8>> {
    let len = u32::try_from(input.len())
        .map_err(|_| TfeError::Secret("Token too large to protect".to_string()))?;
    let data_in = CRYPT_INTEGER_BLOB {
        cbData: len,
        pbData: input.as_ptr() as *mut u8,
    };
    let mut data_out = CRYPT_INTEGER_BLOB {
        cbData: 0,
        pbData: ptr::null_mut(),
    };

    // SAFETY: data_in points at a live slice for the duration of the call and
    // data_out is written by the API; its buffer is released with LocalFree.
    let ok = unsafe {
        match direction {
            Direction::Protect => CryptProtectData(
                &data_in,
                ptr::null(),
                ptr::null(),
                ptr::null(),
                ptr::null(),
                CRYPTPROTECT_UI_FORBIDDEN,
                &mut data_out,
            ),
            Direction::Unprotect => CryptUnprotectData(
                &data_in,
                ptr::null_mut(),
                ptr::null(),
                ptr::null(),
                ptr::null(),
                CRYPTPROTECT_UI_FORBIDDEN,
                &mut data_out,
            ),
        }
    };

    if ok == 0 {
        let what = match direction {
            Direction::Protect => "CryptProtectData",
            Direction::Unprotect => "CryptUnprotectData",
        };
        return Err(TfeError::Secret(format!(
            "{} failed: {}",
            what,
            std::io::Error::last_os_error()
        )));
    }

    // SAFETY: on success the API returns a buffer of cbData bytes.
    let out = unsafe {
        let bytes = std::slice::from_raw_parts(data_out.pbData, data_out.cbData as usize).to_vec();
        LocalFree(data_out.pbData as _);
        bytes
    };
    Ok(out)
}
