//! Env command handler
//!
//! Lists the binding table so operators can audit which secrets the
//! toolchain expects. Values are never printed.

use std::io::Write;

use crate::config::BindingStatus;
use crate::error::AppResult;

/// Handler for the env command
pub struct EnvCommandHandler {
    statuses: Vec<BindingStatus>,
}

impl EnvCommandHandler {
    pub fn new(statuses: Vec<BindingStatus>) -> Self {
        Self { statuses }
    }

    pub fn execute<W: Write>(&self, out: &mut W) -> AppResult<()> {
        let var_width = self
            .statuses
            .iter()
            .map(|s| s.binding.env_var.len())
            .max()
            .unwrap_or(0)
            .max("VARIABLE".len());
        let key_width = self
            .statuses
            .iter()
            .map(|s| s.binding.key.len())
            .max()
            .unwrap_or(0)
            .max("CONFIG KEY".len());

        writeln!(
            out,
            "{:<var_width$}  {:<key_width$}  {:<6}  SET",
            "VARIABLE", "CONFIG KEY", "SECRET"
        )?;
        for status in &self.statuses {
            writeln!(
                out,
                "{:<var_width$}  {:<key_width$}  {:<6}  {}",
                status.binding.env_var,
                status.binding.key,
                if status.binding.secret { "yes" } else { "no" },
                if status.is_set { "yes" } else { "no" },
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use std::collections::HashMap;

    #[test]
    fn test_env_lists_bindings_without_values() {
        let mut env = HashMap::new();
        env.insert("NETWORKS_KOVAN_URL".to_string(), "https://kovan.example/v2/SECRETSECRETSECRET".to_string());

        let handler = EnvCommandHandler::new(ConfigLoader::with_env(env).binding_status());
        let mut out = Vec::new();
        handler.execute(&mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("VARIABLE"));
        assert!(lines[1].starts_with("NETWORKS_KOVAN_URL"));
        assert!(lines[1].ends_with("yes"));
        assert!(lines[2].starts_with("NETWORKS_MAINNET_URL"));
        assert!(lines[2].ends_with("no"));
        assert!(lines[3].contains("etherscan.api_key"));
        assert!(!output.contains("SECRETSECRETSECRET"));
    }
}
