//! In-memory round store with an optional JSONL file behind it.
//!
//! The collector appends one round at a time and the statistics view reads
//! pages newest-first. The whole history fits comfortably in memory (a busy
//! server produces a few thousand rounds per month), so the file only
//! exists to survive restarts: one JSON round per line, replayed on load.

#[derive(Debug)]
pub enum StoreError {
    DuplicateRound,
    Io(std::io::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateRound => write!(f, "round id already stored"),
            Self::Io(e) => write!(f, "persisting round: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

pub struct RoundStore {
    // Newest first, the order /stats pages are served in.
    rounds: tokio::sync::RwLock<Vec<common::Round>>,
    data_file: Option<std::path::PathBuf>,
}

impl RoundStore {
    pub fn empty() -> Self {
        Self {
            rounds: tokio::sync::RwLock::new(Vec::new()),
            data_file: None,
        }
    }

    /// Loads the round history from a JSONL file, creating it if missing.
    /// Unparseable lines are logged and skipped so one bad write does not
    /// take the whole history down.
    pub async fn load<P>(path: P) -> Result<Self, std::io::Error>
    where
        P: Into<std::path::PathBuf>,
    {
        let path = path.into();

        let mut rounds = Vec::new();
        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            let content = tokio::fs::read_to_string(&path).await?;
            for (lineno, line) in content.lines().enumerate() {
                if line.trim().is_empty() {
                    continue;
                }
                match serde_json::from_str::<common::Round>(line) {
                    Ok(round) => rounds.push(round),
                    Err(e) => {
                        tracing::warn!("Skipping malformed round on line {}: {:?}", lineno + 1, e);
                    }
                }
            }
        }

        sort_newest_first(&mut rounds);
        tracing::info!("Loaded {} rounds from {:?}", rounds.len(), path);

        Ok(Self {
            rounds: tokio::sync::RwLock::new(rounds),
            data_file: Some(path),
        })
    }

    pub async fn insert(&self, round: common::Round) -> Result<(), StoreError> {
        let mut rounds = self.rounds.write().await;

        if rounds.iter().any(|r| r.id == round.id) {
            return Err(StoreError::DuplicateRound);
        }

        if let Some(path) = self.data_file.as_ref() {
            let line = serde_json::to_string(&round).expect("round serialization is infallible");
            append_line(path, &line).await.map_err(StoreError::Io)?;
        }

        rounds.push(round);
        sort_newest_first(&mut rounds);
        Ok(())
    }

    /// One page of rounds, newest first. Past the end of the history this
    /// returns an empty vec, which is how consumers detect the last page.
    pub async fn page(&self, limit: usize, offset: usize) -> Vec<common::Round> {
        let rounds = self.rounds.read().await;
        rounds.iter().skip(offset).take(limit).cloned().collect()
    }

    pub async fn all(&self) -> Vec<common::Round> {
        self.rounds.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.rounds.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rounds.read().await.is_empty()
    }
}

fn sort_newest_first(rounds: &mut [common::Round]) {
    rounds.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}

async fn append_line(path: &std::path::Path, line: &str) -> Result<(), std::io::Error> {
    use tokio::io::AsyncWriteExt;

    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(line.as_bytes()).await?;
    file.write_all(b"\n").await?;
    Ok(())
}
