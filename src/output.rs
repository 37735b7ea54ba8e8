use crate::summary::MatchSummary;
use crate::Result;
use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

const OUTPUT_PREFIX: &str = "ids-";

/// Path the summary of `input` is written to, `ids-` prefixed to the path as given
pub fn output_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(OUTPUT_PREFIX);
    name.push(input.as_os_str());
    PathBuf::from(name)
}

/// Write the summary as json, readable and writable only by the owner.
///
/// An existing file is replaced.
pub fn write_summary(path: &Path, summary: &MatchSummary) -> Result<()> {
    let json = serde_json::to_vec(summary)?;

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    file.write_all(&json)?;
    info!(path = %path.display(), bytes = json.len(), "summary written");
    Ok(())
}

#[test]
fn test_output_path() {
    assert_eq!(PathBuf::from("ids-match.log"), output_path(Path::new("match.log")));
    assert_eq!(
        PathBuf::from("ids-logs/match.log"),
        output_path(Path::new("logs/match.log"))
    );
    assert_eq!(PathBuf::from("ids-.."), output_path(Path::new("..")));
}
