use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// 把發佈的狀態寫成本機檔案
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // 先寫暫存檔再改名，讀取端不會看到寫到一半的內容
        let tmp_path = full_path.with_extension("json.tmp");
        fs::write(&tmp_path, data)?;
        fs::rename(&tmp_path, &full_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_file_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("state");
        let storage = LocalStorage::new(base.to_str().unwrap().to_string());

        storage
            .write_file("bring_shopping_list_home.json", b"{\"state\":1}")
            .await
            .unwrap();

        let written = fs::read_to_string(base.join("bring_shopping_list_home.json")).unwrap();
        assert_eq!(written, "{\"state\":1}");
        assert!(!base.join("bring_shopping_list_home.json.tmp").exists());
    }
}
