use crate::error::SdkError;

pub fn get_exit_code(error: &SdkError) -> i32 {
    match error {
        SdkError::InvalidVersionFormat(_) | SdkError::ConfigError(_) => 2,

        SdkError::SdkPathNotFound { .. } => 3,

        SdkError::JavaPathNotFound { .. } => 4,

        SdkError::PlatformNotFound(_) | SdkError::NoCommandLineTools => 5,

        SdkError::UnsupportedPlatform { .. } => 6,

        _ => 1,
    }
}
