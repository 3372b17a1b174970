use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub trait ConfigContentProvider {
    /// `Ok(None)` when there is nothing stored yet.
    fn get_config_content(&self) -> Result<Option<String>, String>;
    fn set_config_content(&self, content: &str) -> Result<(), String>;
}

pub struct FileContentConfigProvider {
    file_path: PathBuf,
}

impl FileContentConfigProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!(
                "Failed to read config file {}: {}",
                self.file_path.display(),
                err
            )),
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        if let Some(parent) = self.file_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }
        std::fs::write(&self.file_path, content).map_err(|e| {
            format!(
                "Failed to write config file {}: {}",
                self.file_path.display(),
                e
            )
        })
    }
}

#[derive(Default)]
pub struct InMemoryConfigProvider {
    content: Mutex<Option<String>>,
}

impl InMemoryConfigProvider {
    pub fn new(content: Option<String>) -> Self {
        Self {
            content: Mutex::new(content),
        }
    }
}

impl ConfigContentProvider for InMemoryConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        let content = self
            .content
            .lock()
            .map_err(|_| "Config storage lock poisoned".to_string())?;
        Ok(content.clone())
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        let mut current = self
            .content
            .lock()
            .map_err(|_| "Config storage lock poisoned".to_string())?;
        *current = Some(content.to_string());
        Ok(())
    }
}
