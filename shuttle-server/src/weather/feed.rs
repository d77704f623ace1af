//! Shared weather feed.

use std::sync::Arc;

use tokio::sync::RwLock;

use super::WeatherReading;

/// Thread-safe holder for the current weather reading.
///
/// This is the seam where a real weather API would be wired in; for now the
/// reading is whatever was last pushed via [`WeatherFeed::update`]. Cloning
/// is cheap and all clones observe the same reading.
#[derive(Clone)]
pub struct WeatherFeed {
    inner: Arc<RwLock<WeatherReading>>,
}

impl WeatherFeed {
    /// Create a feed starting from the given reading.
    pub fn new(initial: WeatherReading) -> Self {
        Self {
            inner: Arc::new(RwLock::new(initial)),
        }
    }

    /// Returns the current reading.
    pub async fn current(&self) -> WeatherReading {
        self.inner.read().await.clone()
    }

    /// Replace the current reading.
    pub async fn update(&self, reading: WeatherReading) {
        *self.inner.write().await = reading;
    }
}

impl Default for WeatherFeed {
    fn default() -> Self {
        Self::new(WeatherReading::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::Condition;

    #[tokio::test]
    async fn starts_with_initial_reading() {
        let feed = WeatherFeed::new(WeatherReading::new(Condition::Fog, 12.0));
        let reading = feed.current().await;
        assert_eq!(reading.condition, Condition::Fog);
        assert_eq!(reading.temp_celsius, 12.0);
    }

    #[tokio::test]
    async fn update_replaces_reading() {
        let feed = WeatherFeed::default();
        feed.update(WeatherReading::new(Condition::Rain, 22.0)).await;

        let reading = feed.current().await;
        assert_eq!(reading.condition, Condition::Rain);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let feed = WeatherFeed::default();
        let clone = feed.clone();

        clone.update(WeatherReading::new(Condition::Fog, 10.0)).await;

        assert_eq!(feed.current().await.condition, Condition::Fog);
    }
}
