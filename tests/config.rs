#[cfg(test)]
mod tests {
    use gplan::db::db::Db;
    use gplan::libs::config::Config;
    use gplan::libs::data_storage::DataStorage;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("APPDATA", temp_dir.path());
            ConfigTestContext { temp_dir }
        }
    }

    // HOME is process-wide, so everything that depends on it lives in one test.
    #[test_context(ConfigTestContext)]
    #[test]
    fn test_data_dir_and_config(ctx: &mut ConfigTestContext) {
        let storage = DataStorage::new().unwrap();
        #[cfg(not(windows))]
        assert_eq!(storage.base_path(), ctx.temp_dir.path().join(".local").join("share").join("gplan"));
        assert!(!storage.base_path().exists());

        // Missing config file falls back to defaults
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());

        // The default database lives in the data dir, which is created on demand
        let db_path = config.db_path().unwrap();
        assert_eq!(db_path, storage.base_path().join("data.db"));
        assert!(storage.base_path().is_dir());

        let db = Db::open(&db_path).unwrap();
        drop(db);
        assert!(db_path.is_file());

        // Saved settings are read back
        let custom = Config {
            db_path: Some(ctx.temp_dir.path().join("elsewhere").join("plan.db")),
            default_priority: 2,
        };
        custom.save().unwrap();
        let loaded = Config::read().unwrap();
        assert_eq!(loaded, custom);

        let override_path = loaded.db_path().unwrap();
        assert!(override_path.parent().unwrap().is_dir());
        Db::open(&override_path).unwrap();
        assert!(override_path.is_file());
    }
}
