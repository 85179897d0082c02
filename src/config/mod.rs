use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// An inclusive vacation interval, both endpoints `DD-MM-YYYY`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacationRange {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub store_file: String,
    pub backup_root: String,
    #[serde(default = "default_backup_folder")]
    pub backup_folder: String,
    #[serde(default = "default_backup_file")]
    pub backup_file: String,
    #[serde(default = "default_credentials_file")]
    pub credentials_file: String,
    #[serde(default = "default_weekly_off")]
    pub weekly_off: String,
    #[serde(default = "default_holiday_region")]
    pub holiday_region: String,
    #[serde(default)]
    pub extra_holidays: Vec<String>,
    #[serde(default = "default_vacations")]
    pub vacations: Vec<VacationRange>,
    #[serde(default = "default_reminder_hour")]
    pub reminder_hour: u32,
    #[serde(default = "default_reminder_minute")]
    pub reminder_minute: u32,
}

fn default_backup_folder() -> String {
    "Attendance Backup".to_string()
}
fn default_backup_file() -> String {
    "attendance_backup.csv".to_string()
}
fn default_credentials_file() -> String {
    Config::config_dir()
        .join("credentials.json")
        .to_string_lossy()
        .to_string()
}
fn default_weekly_off() -> String {
    "Sunday".to_string()
}
fn default_holiday_region() -> String {
    "IN".to_string()
}
fn default_vacations() -> Vec<VacationRange> {
    vec![
        VacationRange {
            start: "15-05-2026".to_string(),
            end: "30-06-2026".to_string(),
        },
        VacationRange {
            start: "20-12-2026".to_string(),
            end: "05-01-2027".to_string(),
        },
    ]
}
fn default_reminder_hour() -> u32 {
    7
}
fn default_reminder_minute() -> u32 {
    0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_file: Self::store_file_path().to_string_lossy().to_string(),
            backup_root: Self::config_dir()
                .join("backup")
                .to_string_lossy()
                .to_string(),
            backup_folder: default_backup_folder(),
            backup_file: default_backup_file(),
            credentials_file: default_credentials_file(),
            weekly_off: default_weekly_off(),
            holiday_region: default_holiday_region(),
            extra_holidays: Vec::new(),
            vacations: default_vacations(),
            reminder_hour: default_reminder_hour(),
            reminder_minute: default_reminder_minute(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("attlog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".attlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("attlog.conf")
    }

    /// Return the full path of the attendance record log
    pub fn store_file_path() -> PathBuf {
        Self::config_dir().join("attendance.csv")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize configuration and the record log
    pub fn init_all(custom_store: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Record log path: user provided or default
        let store_path = if let Some(name) = custom_store {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::store_file_path()
        };

        let mut config = Config::default();
        config.store_file = store_path.to_string_lossy().to_string();

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).unwrap();
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create the record log with its header row if not present
        if !store_path.exists() {
            let mut file = fs::File::create(&store_path)?;
            file.write_all(b"Date,Day,Status,Synced\n")?;
        }

        println!("✅ Record log:  {:?}", store_path);

        Ok(())
    }
}
