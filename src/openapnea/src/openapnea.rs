use openapnea_algos::compute_summary;
use openapnea_codec::{normalize_with_report, ColumnNames, NormalizeReport, ParseError};
use openapnea_store::{HistoryStorage, HistoryStore, StorageError};
use openapnea_types::{
    history::HistoryLedger,
    readings::ReadingSeries,
    summary::{IndexSource, SummaryRecord},
};

use crate::{content_hash, SummaryCache};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineConfig {
    pub columns: ColumnNames,
    pub index_source: IndexSource,
}

/// Everything derived from one upload, before touching history.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub summary: SummaryRecord,
    pub series: ReadingSeries,
    pub report: NormalizeReport,
}

/// Outcome of a full run. A history failure does not discard the analysis.
#[derive(Debug)]
pub struct RunReport {
    pub analysis: Analysis,
    pub history: Result<HistoryLedger, StorageError>,
}

pub struct OpenApnea<S> {
    config: PipelineConfig,
    history: HistoryStore<S>,
    cache: Option<SummaryCache>,
}

impl<S> OpenApnea<S>
where
    S: HistoryStorage,
{
    pub fn new(config: PipelineConfig, storage: S) -> Self {
        Self {
            config,
            history: HistoryStore::new(storage),
            cache: None,
        }
    }

    /// Reuse analyses of byte-identical uploads.
    pub fn with_cache(mut self) -> Self {
        self.cache = Some(SummaryCache::new());
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PipelineConfig) {
        if config != self.config {
            if let Some(cache) = self.cache.as_mut() {
                cache.clear();
            }
        }
        self.config = config;
    }

    pub fn cache(&self) -> Option<&SummaryCache> {
        self.cache.as_ref()
    }

    pub fn history(&self) -> &HistoryStore<S> {
        &self.history
    }

    /// Parses and summarizes an upload without touching history.
    pub fn analyze(&mut self, bytes: &[u8]) -> Result<Analysis, ParseError> {
        let key = self.cache.as_ref().map(|_| content_hash(bytes));

        if let (Some(cache), Some(key)) = (self.cache.as_ref(), key.as_deref()) {
            if let Some(analysis) = cache.get(key) {
                debug!("Using cached analysis for {}", key);
                return Ok(analysis.clone());
            }
        }

        let (series, report) = normalize_with_report(bytes, &self.config.columns)?;
        let summary = compute_summary(&series, self.config.index_source);
        let analysis = Analysis {
            summary,
            series,
            report,
        };

        if let (Some(cache), Some(key)) = (self.cache.as_mut(), key) {
            cache.insert(key, analysis.clone());
        }

        Ok(analysis)
    }

    /// Analyzes an upload and upserts its summary into history.
    ///
    /// Parse failures abort the run before history is read. Storage failures
    /// are logged and returned in [`RunReport::history`].
    pub fn process(&mut self, bytes: &[u8]) -> Result<RunReport, ParseError> {
        let analysis = self.analyze(bytes)?;
        info!(
            "Processed {} reading(s) for {}: {} desaturation(s), ODI {}",
            analysis.series.len(),
            analysis.summary.date,
            analysis.summary.desaturation_count,
            analysis.summary.odi
        );

        let history = self.history.upsert(analysis.summary);
        if let Err(e) = &history {
            warn!("History update skipped: {}", e);
        }

        Ok(RunReport { analysis, history })
    }
}
