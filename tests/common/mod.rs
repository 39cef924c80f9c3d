//! Common testing utilities for cf-secret-sync integration tests.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test context that manages temporary files and a stub wrangler binary.
pub struct TestContext {
    /// Path to temporary directory
    pub temp_path: PathBuf,
    /// The temporary directory (kept to prevent early deletion)
    _temp_dir: TempDir,
}

impl TestContext {
    /// Create a new test context with a temporary directory.
    pub fn new() -> anyhow::Result<Self> {
        let temp_dir = TempDir::new()?;
        let temp_path = temp_dir.path().to_path_buf();

        Ok(Self {
            temp_path,
            _temp_dir: temp_dir,
        })
    }

    /// Create a test file with content.
    pub fn create_file(&self, name: &str, content: &str) -> anyhow::Result<PathBuf> {
        let file_path = self.temp_path.join(name);
        let mut file = fs::File::create(&file_path)?;
        file.write_all(content.as_bytes())?;
        Ok(file_path)
    }

    /// Write a `.dev.vars` file from key/value pairs.
    #[allow(dead_code)]
    pub fn write_dev_vars(
        &self,
        entries: &[(impl AsRef<str>, impl AsRef<str>)],
    ) -> anyhow::Result<PathBuf> {
        let content = entries
            .iter()
            .map(|(k, v)| format!("{}={}", k.as_ref(), v.as_ref()))
            .collect::<Vec<_>>()
            .join("\n");

        self.create_file(".dev.vars", &content)
    }

    /// Install a stub wrangler script in the temp directory.
    ///
    /// The stub answers `--version`, records each `secret put` argv to
    /// `wrangler.log` (one line per invocation, in call order) and the
    /// piped stdin to `values.log` as `KEY=VALUE` lines. If `fail_on` is
    /// given, the stub exits non-zero for that (key, worker) pair.
    #[allow(dead_code)]
    pub fn stub_wrangler(&self, fail_on: Option<(&str, &str)>) -> anyhow::Result<PathBuf> {
        let cmd_log = self.temp_path.join("wrangler.log");
        let values_log = self.temp_path.join("values.log");

        let fail_clause = match fail_on {
            Some((key, worker)) => format!(
                "if [ \"$3\" = \"{key}\" ] && [ \"$5\" = \"{worker}\" ]; then exit 1; fi\n"
            ),
            None => String::new(),
        };

        let script = format!(
            "#!/bin/sh\n\
             if [ \"$1\" = \"--version\" ]; then\n\
             \techo \"wrangler-stub 0.0.0\"\n\
             \texit 0\n\
             fi\n\
             val=$(cat)\n\
             echo \"$@\" >> \"{cmd_log}\"\n\
             echo \"$3=$val\" >> \"{values_log}\"\n\
             {fail_clause}\
             exit 0\n",
            cmd_log = cmd_log.display(),
            values_log = values_log.display(),
        );

        let path = self.create_file("wrangler-stub", &script)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
        }

        Ok(path)
    }

    /// Recorded `secret put` invocations, in call order.
    #[allow(dead_code)]
    pub fn invocations(&self) -> Vec<String> {
        read_log_lines(&self.temp_path.join("wrangler.log"))
    }

    /// Recorded `KEY=VALUE` stdin captures, in call order.
    #[allow(dead_code)]
    pub fn uploaded_values(&self) -> Vec<String> {
        read_log_lines(&self.temp_path.join("values.log"))
    }

    /// Get the path to a file in the temp directory.
    #[allow(dead_code)]
    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_path.join(name)
    }
}

#[allow(dead_code)]
fn read_log_lines(path: &std::path::Path) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(content) => content.lines().map(str::to_string).collect(),
        Err(_) => Vec::new(),
    }
}
