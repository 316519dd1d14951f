use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

fn default_timeline_width() -> usize {
    60
}

fn default_status_name() -> String {
    "Full Training".to_string()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    pub status_dir: String,
    #[serde(default = "default_status_name")]
    pub default_status: String,
    #[serde(default = "default_timeline_width")]
    pub timeline_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            status_dir: Self::status_dir_path().to_string_lossy().to_string(),
            default_status: default_status_name(),
            timeline_width: default_timeline_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("coachboard")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".coachboard")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("coachboard.conf")
    }

    /// Return the full path of the SQLite client database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("clients.sqlite")
    }

    /// Return the root directory holding the per-client status documents
    pub fn status_dir_path() -> PathBuf {
        Self::config_dir().join("patient_status")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Initialize configuration, database file and status document root
    pub fn init_all(
        custom_db: Option<String>,
        custom_status_dir: Option<String>,
        is_test: bool,
    ) -> io::Result<()> {
        let dir = Self::config_dir();
        if !is_test {
            fs::create_dir_all(&dir)?;
        }

        let db_path = match custom_db {
            Some(name) => {
                let p = std::path::Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        let status_dir = match custom_status_dir {
            Some(d) => PathBuf::from(d),
            None => Self::status_dir_path(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            status_dir: status_dir.to_string_lossy().to_string(),
            default_status: default_status_name(),
            timeline_width: default_timeline_width(),
        };

        // Write config file (skipped in test mode so tests never touch $HOME)
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("config serialization error: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file and status document root if missing
        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }
        fs::create_dir_all(&status_dir)?;

        println!("✅ Database:    {:?}", db_path);
        println!("✅ Status dir:  {:?}", status_dir);

        Ok(())
    }
}
