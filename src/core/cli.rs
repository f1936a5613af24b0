use std::path::PathBuf;

const CONFIG_FLAG: &str = "--config";
const LOGS_FLAG: &str = "--logs";

/// Where the session reads its config and writes its logs. Both accept
/// `--flag value` and `--flag=value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliPaths {
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl Default for CliPaths {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from("bikeshare.json"),
            logs_dir: PathBuf::from("logs"),
        }
    }
}

impl CliPaths {
    pub fn from_env() -> Result<Self, String> {
        Self::from_args(std::env::args().skip(1))
    }

    pub fn from_args<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut paths = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) => (flag.to_string(), Some(value.to_string())),
                None => (arg, None),
            };
            let slot = match flag.as_str() {
                CONFIG_FLAG => &mut paths.config_path,
                LOGS_FLAG => &mut paths.logs_dir,
                _ => return Err(format!("Unknown argument: {flag}")),
            };
            let value = inline
                .or_else(|| args.next())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| format!("Missing value for {flag}"))?;
            *slot = PathBuf::from(value);
        }
        Ok(paths)
    }
}
