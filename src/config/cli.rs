use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = fs::read(full_path)?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        // 目錄不存在時先建立
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_creates_missing_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("images/order-bump");
        let storage = LocalStorage::new(base.to_str().unwrap());

        storage.write_file("wallet.jpeg", b"data").await.unwrap();

        assert!(base.join("wallet.jpeg").exists());
        assert_eq!(storage.read_file("wallet.jpeg").await.unwrap(), b"data");
    }

    #[tokio::test]
    async fn test_read_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap());
        assert!(storage.read_file("index.html").await.is_err());
    }
}
