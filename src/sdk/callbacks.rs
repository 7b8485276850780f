//! Host callbacks forwarded to the SDK unmodified

use std::fmt;
use std::sync::Arc;

use crate::models::MediaResult;

/// Receives captured media files
pub trait MediaCallback: Send + Sync {
    fn on_media_captured(&self, result: MediaResult);
}

/// Stores and restores encrypted biometric tokens on behalf of the SDK
pub trait EncryptedBiometricTokenHandler: Send + Sync {
    /// The SDK needs a previously stored token for `customer_user_hash`.
    /// `completion` must be called with the token.
    fn on_token_requested(
        &self,
        customer_user_hash: &str,
        completion: Box<dyn FnOnce(String) + Send>,
    );

    fn on_token_generated(&self, customer_user_hash: &str, encrypted_token: &str);
}

macro_rules! callback_handle {
    ($name:ident, $trait:ident) => {
        /// Shared handle compared by identity
        #[derive(Clone)]
        pub struct $name(Arc<dyn $trait>);

        impl $name {
            pub fn new(callback: impl $trait + 'static) -> Self {
                $name(Arc::new(callback))
            }

            pub fn from_arc(callback: Arc<dyn $trait>) -> Self {
                $name(callback)
            }

            pub fn get(&self) -> &dyn $trait {
                self.0.as_ref()
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                Arc::ptr_eq(&self.0, &other.0)
            }
        }

        impl Eq for $name {}

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(concat!(stringify!($name), "(..)"))
            }
        }
    };
}

callback_handle!(MediaCallbackHandle, MediaCallback);
callback_handle!(TokenHandlerHandle, EncryptedBiometricTokenHandler);

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::models::MediaFile;

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<String>>,
    }

    impl MediaCallback for Recorder {
        fn on_media_captured(&self, result: MediaResult) {
            self.seen
                .lock()
                .unwrap()
                .push(result.capture_type().as_str().to_string());
        }
    }

    #[test]
    fn test_handles_compare_by_identity() {
        let first = MediaCallbackHandle::new(Recorder::default());
        let second = MediaCallbackHandle::new(Recorder::default());
        assert_eq!(first, first.clone());
        assert_ne!(first, second);
    }

    #[test]
    fn test_handle_forwards_calls() {
        let recorder = Arc::new(Recorder::default());
        let handle = MediaCallbackHandle::from_arc(recorder.clone());
        handle.get().on_media_captured(MediaResult::Selfie {
            file: MediaFile::default(),
        });
        assert_eq!(*recorder.seen.lock().unwrap(), vec!["FACE".to_string()]);
    }
}
