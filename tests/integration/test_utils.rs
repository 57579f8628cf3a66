//! Shared test utilities for integration tests

use std::path::{Path, PathBuf};

/// A small PBX: local and toll-free routing, an international trunk reached
/// through an access code, and a cycle back to the root.
pub const SAMPLE_DIALPLAN: &str = r#"
[general]
static = yes

[default]
ignorepat => 9
exten => 0,1,Dial(SIP/operator)
exten => _1NXXNXXXXXX,1,Dial(SIP/trunk/${EXTEN})
same => n,Hangup()
exten => 100,hint,SIP/100
exten => s,1,Answer()
include => local|x|9
include => intl|x|9011

[local]
exten => _NXXXXXX,1,Dial(SIP/trunk/${EXTEN})
include => default

[intl]
exten => _X.,1,Dial(SIP/trunk/011${EXTEN})
"#;

/// Expected map for `default` in [`SAMPLE_DIALPLAN`]
pub const SAMPLE_MAP: &str = "0|1[2-9]xx[2-9]xxxxxx|9,[2-9]xxxxxx|9011,x.";

/// Write a dialplan to `dir/extensions.conf` and return its path.
pub fn write_dialplan(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("extensions.conf");
    std::fs::write(&path, contents).unwrap();
    path
}
