use config::Config;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    locate: Locate,
    nominatim: Nominatim,
    connection: Connection,
    idle: Idle,
    ui: Ui,
}

impl AppConfig {
    pub fn load() -> Self {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default())
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn locate(&self) -> &Locate {
        &self.locate
    }

    pub fn nominatim(&self) -> &Nominatim {
        &self.nominatim
    }

    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    pub fn idle(&self) -> &Idle {
        &self.idle
    }

    pub fn ui(&self) -> &Ui {
        &self.ui
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    store_buffer_size: usize,
}

impl Core {
    pub fn store_buffer_size(&self) -> usize {
        self.store_buffer_size
    }
}

#[derive(Debug, Deserialize)]
pub struct Locate {
    url: String,
    #[serde(with = "humantime_serde")]
    timeout: Duration,
}

impl Locate {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[derive(Debug, Deserialize)]
pub struct Nominatim {
    url: String,
    limit: usize,
    #[serde(with = "humantime_serde")]
    timeout: Duration,
}

impl Nominatim {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[derive(Debug, Deserialize)]
pub struct Connection {
    sysfs_root: String,
    #[serde(with = "humantime_serde")]
    poll_interval: Duration,
    save_data: bool,
}

impl Connection {
    pub fn sysfs_root(&self) -> &str {
        &self.sysfs_root
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub fn save_data(&self) -> bool {
        self.save_data
    }
}

#[derive(Debug, Deserialize)]
pub struct Idle {
    #[serde(with = "humantime_serde")]
    fallback_delay: Duration,
}

impl Idle {
    pub fn fallback_delay(&self) -> Duration {
        self.fallback_delay
    }
}

#[derive(Debug, Deserialize)]
pub struct Ui {
    viewport_rows: usize,
    card_rows: usize,
    visibility_threshold: f32,
    #[serde(with = "humantime_serde")]
    fade_duration: Duration,
    #[serde(with = "humantime_serde")]
    tick_interval: Duration,
}

impl Ui {
    pub fn viewport_rows(&self) -> usize {
        self.viewport_rows
    }

    pub fn card_rows(&self) -> usize {
        self.card_rows
    }

    pub fn visibility_threshold(&self) -> f32 {
        self.visibility_threshold
    }

    pub fn fade_duration(&self) -> Duration {
        self.fade_duration
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core { store_buffer_size: 8 },
                locate: Locate {
                    url: "https://locate.url/json/".to_string(),
                    timeout: Duration::from_secs(10),
                },
                nominatim: Nominatim {
                    url: "https://nominatim.url".to_string(),
                    limit: 20,
                    timeout: Duration::from_secs(30),
                },
                connection: Connection {
                    sysfs_root: "/sys/class/net".to_string(),
                    poll_interval: Duration::from_millis(100),
                    save_data: false,
                },
                idle: Idle {
                    fallback_delay: Duration::from_millis(50),
                },
                ui: Ui {
                    viewport_rows: 9,
                    card_rows: 3,
                    visibility_threshold: 0.1,
                    fade_duration: Duration::from_millis(700),
                    tick_interval: Duration::from_millis(50),
                },
            },
        }
    }

    pub fn locate_url(mut self, url: String) -> Self {
        self.config.locate.url = url;
        self
    }

    pub fn nominatim_url(mut self, url: String) -> Self {
        self.config.nominatim.url = url;
        self
    }

    pub fn sysfs_root(mut self, root: String) -> Self {
        self.config.connection.sysfs_root = root;
        self
    }

    pub fn save_data(mut self, save_data: bool) -> Self {
        self.config.connection.save_data = save_data;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
