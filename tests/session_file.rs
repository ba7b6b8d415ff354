#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use timebill::libs::billing::session_from_inputs;
    use timebill::libs::error::BillingError;
    use timebill::libs::session_file::{SessionFile, HEADER};
    use timebill::libs::sessions::SessionCollection;

    struct SessionFileTestContext {
        temp_dir: TempDir,
    }

    impl SessionFileTestContext {
        fn path(&self, name: &str) -> PathBuf {
            self.temp_dir.path().join(name)
        }
    }

    impl TestContext for SessionFileTestContext {
        fn setup() -> Self {
            SessionFileTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn sample_sessions() -> SessionCollection {
        let mut sessions = SessionCollection::new();
        sessions.insert(session_from_inputs("09:00", "10:20").unwrap());
        sessions.insert(session_from_inputs("22:00", "01:30").unwrap());
        sessions.insert(session_from_inputs("13.15", "14;00").unwrap());
        sessions
    }

    #[test_context(SessionFileTestContext)]
    #[test]
    fn test_missing_file_loads_empty(ctx: &mut SessionFileTestContext) {
        let file = SessionFile::new(ctx.path("absent.csv"));
        assert!(!file.exists());
        assert!(file.load().unwrap().is_empty());
    }

    #[test_context(SessionFileTestContext)]
    #[test]
    fn test_save_then_load_keeps_sessions(ctx: &mut SessionFileTestContext) {
        let file = SessionFile::new(ctx.path("march.csv"));
        let sessions = sample_sessions();

        file.save(&sessions).unwrap();
        let loaded = file.load().unwrap();

        assert_eq!(loaded.len(), 3);
        let starts: Vec<&str> = loaded.iter().map(|r| r.start_time.as_str()).collect();
        assert_eq!(starts, vec!["09:00", "22:00", "13:15"]);

        let overnight = loaded.get(1).unwrap();
        assert_eq!(overnight.end_time, "01:30");
        assert_eq!(overnight.formatted_cost, "$770.00");
        assert_eq!(overnight.cost, 770.0);
        assert_eq!(loaded.total_cost(), sessions.total_cost());
    }

    #[test_context(SessionFileTestContext)]
    #[test]
    fn test_file_layout(ctx: &mut SessionFileTestContext) {
        let path = ctx.path("layout.csv");
        let mut sessions = SessionCollection::new();
        sessions.insert(session_from_inputs("09:00", "10:20").unwrap());
        SessionFile::new(&path).save(&sessions).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], HEADER.join(","));
        assert_eq!(lines[1], "09:00,10:20,1,20,1,30,1.5,$330.00,330.0");
        assert_eq!(lines.len(), 2);
    }

    #[test_context(SessionFileTestContext)]
    #[test]
    fn test_empty_collection_writes_header_only(ctx: &mut SessionFileTestContext) {
        let path = ctx.path("empty.csv");
        let file = SessionFile::new(&path);
        file.save(&SessionCollection::new()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.trim_end(), HEADER.join(","));
        assert!(file.load().unwrap().is_empty());
    }

    #[test_context(SessionFileTestContext)]
    #[test]
    fn test_save_overwrites_previous_content(ctx: &mut SessionFileTestContext) {
        let file = SessionFile::new(ctx.path("overwrite.csv"));
        file.save(&sample_sessions()).unwrap();

        let mut fewer = file.load().unwrap();
        fewer.remove_all([0, 2]);
        file.save(&fewer).unwrap();

        let loaded = file.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.get(0).unwrap().start_time, "22:00");
    }

    #[test_context(SessionFileTestContext)]
    #[test]
    fn test_save_creates_parent_directories(ctx: &mut SessionFileTestContext) {
        let file = SessionFile::new(ctx.path("2024/q1/march.csv"));
        file.save(&sample_sessions()).unwrap();
        assert!(file.exists());
    }

    #[test_context(SessionFileTestContext)]
    #[test]
    fn test_malformed_row_is_persistence_error(ctx: &mut SessionFileTestContext) {
        let path = ctx.path("broken.csv");
        fs::write(&path, format!("{}\n09:00,10:20,one,20,1,30,1.5,$330.00,330.0\n", HEADER.join(","))).unwrap();

        match SessionFile::new(&path).load() {
            Err(BillingError::Persistence { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected persistence error, got {:?}", other),
        }
    }

    #[test_context(SessionFileTestContext)]
    #[test]
    fn test_unwritable_target_is_persistence_error(ctx: &mut SessionFileTestContext) {
        // A directory cannot be opened as a CSV file.
        let dir = ctx.path("occupied");
        fs::create_dir(&dir).unwrap();

        let result = SessionFile::new(&dir).save(&sample_sessions());
        assert!(matches!(result, Err(BillingError::Persistence { .. })));
    }
}
