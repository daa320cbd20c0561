use crate::commands::{CmdMessage, CmdResult};
use crate::config::CodeHubConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = CodeHubConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => Ok(result.with_config(config)),
        ConfigAction::ShowKey(key) => {
            match config.get(&key) {
                Some(value) => result.add_message(CmdMessage::info(value)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            if let Err(e) = config.set(&key, &value) {
                result.add_message(CmdMessage::error(e.to_string()));
                return Ok(result);
            }
            config.save(config_dir)?;
            let shown = config.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, shown)));
            Ok(result.with_config(config))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::view::SortOrder;
    use tempfile::tempdir;

    #[test]
    fn test_set_persists_and_show_reads_back() {
        let dir = tempdir().unwrap();
        run(
            dir.path(),
            ConfigAction::Set("sort".into(), "oldest".into()),
        )
        .unwrap();

        let all = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(all.config.unwrap().default_sort, SortOrder::Oldest);

        let one = run(dir.path(), ConfigAction::ShowKey("sort".into())).unwrap();
        assert_eq!(one.messages[0].content, "oldest");
    }

    #[test]
    fn test_bad_key_is_an_error_message() {
        let dir = tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::Set("nope".into(), "1".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(!dir.path().join("config.json").exists());
    }
}
