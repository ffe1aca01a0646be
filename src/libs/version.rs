//! Build metadata stamped by `build.rs`.

use super::messages::Message;

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

pub fn full_version() -> Message {
    Message::VersionInfo {
        name: APP_METADATA_NAME.to_string(),
        version: APP_METADATA_VERSION.to_string(),
        commit: APP_METADATA_GIT_COMMIT.to_string(),
    }
}
