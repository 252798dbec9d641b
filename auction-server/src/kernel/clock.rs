#[cfg(test)]
use mockall::automock;
use {
    std::fmt::Debug,
    time::OffsetDateTime,
};

/// Source of the current time for the auction session logic.
#[cfg_attr(test, automock)]
pub trait Clock: Debug + Send + Sync + 'static {
    fn now(&self) -> OffsetDateTime;
}

#[derive(Debug, Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

#[cfg(test)]
pub mod tests {
    use {
        super::Clock,
        time::OffsetDateTime,
    };

    /// Wall time driven by the tokio clock, so paused tests control it with `tokio::time::advance`.
    #[derive(Debug, Clone)]
    pub struct TokioClock {
        base:  OffsetDateTime,
        start: tokio::time::Instant,
    }

    impl TokioClock {
        pub fn new(base: OffsetDateTime) -> Self {
            Self {
                base,
                start: tokio::time::Instant::now(),
            }
        }
    }

    impl Clock for TokioClock {
        fn now(&self) -> OffsetDateTime {
            self.base + self.start.elapsed()
        }
    }
}
