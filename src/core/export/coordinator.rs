//! Export coordinator - main orchestrator for the export process
//!
//! The coordinator turns records into CSV rows, fetches every image, packs
//! CSV and images into one archive and hands it to the configured sink.
//! The first failed image fetch aborts the export before any archive exists.

use crate::adapters::archive::{ArchiveBuilder, ArchiveEntry, ArchiveSink, DirectorySink};
use crate::adapters::http::{HttpImageFetcher, ImageFetcher};
use crate::config::LotpackConfig;
use crate::core::document::render_csv;
use crate::core::export::summary::ExportSummary;
use crate::core::mapper::{Row, RowMapper};
use crate::domain::{AuctionItem, LotpackError, Result};
use futures::stream::{self, StreamExt, TryStreamExt};
use std::sync::Arc;
use std::time::Instant;

/// Export coordinator
pub struct ExportCoordinator {
    config: LotpackConfig,
    mapper: RowMapper,
    fetcher: Arc<dyn ImageFetcher>,
    sink: Arc<dyn ArchiveSink>,
}

impl ExportCoordinator {
    /// Create a coordinator with the HTTP fetcher and directory sink from configuration
    pub fn new(config: LotpackConfig) -> Result<Self> {
        let fetcher = Arc::new(HttpImageFetcher::new(&config.fetch)?);
        let sink = Arc::new(DirectorySink::new(&config.archive.output_dir));
        Ok(Self::with_adapters(config, fetcher, sink))
    }

    /// Create a coordinator with explicit adapters
    pub fn with_adapters(
        config: LotpackConfig,
        fetcher: Arc<dyn ImageFetcher>,
        sink: Arc<dyn ArchiveSink>,
    ) -> Self {
        let mapper = RowMapper::new(config.title.generator());
        Self {
            config,
            mapper,
            fetcher,
            sink,
        }
    }

    /// Row mapper in use
    pub fn mapper(&self) -> &RowMapper {
        &self.mapper
    }

    /// All rows in record order, then image order
    pub fn build_rows(&self, items: &[AuctionItem]) -> Vec<Row> {
        items
            .iter()
            .flat_map(|item| self.mapper.map_item(item))
            .collect()
    }

    /// Execute the export
    ///
    /// Any failure is logged and returned unchanged; nothing is delivered
    /// unless every step succeeded.
    pub async fn execute_export(&self, items: &[AuctionItem]) -> Result<ExportSummary> {
        let start_time = Instant::now();
        let mut summary = ExportSummary::new();

        match self.run(items, &mut summary).await {
            Ok(()) => {
                let summary = summary
                    .with_duration(start_time.elapsed())
                    .mark_completed();
                crate::log_export_complete!(
                    summary.total_rows,
                    summary.images_fetched,
                    summary.duration
                );
                summary.log_summary();
                Ok(summary)
            }
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                Err(e)
            }
        }
    }

    async fn run(&self, items: &[AuctionItem], summary: &mut ExportSummary) -> Result<()> {
        let image_count: usize = items.iter().map(|item| item.images.len()).sum();
        crate::log_export_start!(items.len(), image_count);

        summary.total_items = items.len();
        summary.items_without_images = items.iter().filter(|item| !item.has_images()).count();

        let rows = self.build_rows(items);
        summary.total_rows = rows.len();
        let csv = render_csv(self.mapper.headers(), rows)?;

        if self.config.application.dry_run {
            summary.dry_run = true;
            tracing::info!(
                rows = summary.total_rows,
                images = image_count,
                csv_bytes = csv.len(),
                "Dry run - skipping image fetch and archive output"
            );
            return Ok(());
        }

        let images = self.fetch_images(items).await?;
        summary.images_fetched = images.len();
        summary.image_bytes = images.iter().map(|entry| entry.data.len()).sum();

        let mut builder = ArchiveBuilder::new(self.config.archive.compression_level)?;
        builder
            .add(ArchiveEntry::text(self.config.archive.csv_name.as_str(), &csv))
            .extend(images);
        let archive = builder.build_async().await?;
        summary.archive_bytes = archive.len();

        let path = self
            .sink
            .deliver(archive, &self.config.archive.file_name)
            .await?;
        summary.output_path = Some(path);

        Ok(())
    }

    /// Fetches every image as an archive entry named by its 1-based position
    /// across all records
    ///
    /// With `fetch.concurrency` above 1, later images are requested while
    /// earlier ones are in flight; entries still come back in order and the
    /// first failure in order aborts the rest.
    pub async fn fetch_images(&self, items: &[AuctionItem]) -> Result<Vec<ArchiveEntry>> {
        let extension = self.config.archive.image_extension.as_str();
        let fetcher = self.fetcher.as_ref();

        let jobs = items
            .iter()
            .flat_map(|item| item.images.iter())
            .enumerate()
            .map(|(idx, image)| (idx + 1, image));

        stream::iter(jobs)
            .map(|(position, image)| async move {
                tracing::debug!(position, url = %image.url, "Fetching image");
                let data = fetcher.fetch(&image.url).await.map_err(|e| {
                    tracing::error!(position, url = %image.url, error = %e, "Image fetch failed");
                    LotpackError::ImageFetch {
                        position,
                        url: image.url.clone(),
                        message: e.to_string(),
                    }
                })?;
                Ok::<_, LotpackError>(ArchiveEntry::binary(
                    format!("{position}.{extension}"),
                    data,
                ))
            })
            .buffered(self.config.fetch.concurrency.max(1))
            .try_collect()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AuctionItemBuilder;
    use async_trait::async_trait;
    use std::io::{Cursor, Read};
    use std::path::PathBuf;
    use std::sync::Mutex;

    /// Serves the URL itself as the image body, failing for one URL
    #[derive(Default)]
    struct ScriptedFetcher {
        fail_url: Option<String>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedFetcher {
        fn failing_on(url: &str) -> Self {
            Self {
                fail_url: Some(url.to_string()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ImageFetcher for ScriptedFetcher {
        async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
            self.calls.lock().unwrap().push(url.to_string());
            if self.fail_url.as_deref() == Some(url) {
                return Err(LotpackError::Http("connection reset".to_string()));
            }
            Ok(url.as_bytes().to_vec())
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        delivered: Mutex<Vec<(String, Vec<u8>)>>,
    }

    impl RecordingSink {
        fn delivered(&self) -> Vec<(String, Vec<u8>)> {
            self.delivered.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ArchiveSink for RecordingSink {
        async fn deliver(&self, archive: Vec<u8>, file_name: &str) -> Result<PathBuf> {
            self.delivered
                .lock()
                .unwrap()
                .push((file_name.to_string(), archive));
            Ok(PathBuf::from(file_name))
        }
    }

    fn item(category: &str, images: &[(&str, &str)]) -> AuctionItem {
        let mut builder = AuctionItemBuilder::new()
            .category(category)
            .description("<p>desc</p>")
            .start_price(1000);
        for (name, url) in images {
            builder = builder.image(*name, *url);
        }
        builder.build().unwrap()
    }

    fn entry_names(archive: &[u8]) -> Vec<String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(archive)).unwrap();
        (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect()
    }

    fn entry_data(archive: &[u8], name: &str) -> Vec<u8> {
        let mut archive = zip::ZipArchive::new(Cursor::new(archive)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut data = Vec::new();
        file.read_to_end(&mut data).unwrap();
        data
    }

    fn coordinator(
        config: LotpackConfig,
        fetcher: Arc<ScriptedFetcher>,
        sink: Arc<RecordingSink>,
    ) -> ExportCoordinator {
        ExportCoordinator::with_adapters(config, fetcher, sink)
    }

    #[tokio::test]
    async fn test_export_packages_csv_and_images() {
        let fetcher = Arc::new(ScriptedFetcher::default());
        let sink = Arc::new(RecordingSink::default());
        let coordinator = coordinator(LotpackConfig::default(), fetcher.clone(), sink.clone());
        let items = vec![
            item("A", &[("a1", "https://img/a1"), ("a2 (1)", "https://img/a2")]),
            item("B", &[]),
            item("C", &[("c1", "https://img/c1")]),
        ];

        let summary = coordinator.execute_export(&items).await.unwrap();

        assert_eq!(summary.total_items, 3);
        assert_eq!(summary.items_without_images, 1);
        assert_eq!(summary.total_rows, 3);
        assert_eq!(summary.images_fetched, 3);
        assert_eq!(
            summary.output_path,
            Some(PathBuf::from("yahoo_auction_export.zip"))
        );

        let delivered = sink.delivered();
        assert_eq!(delivered.len(), 1);
        let (file_name, archive) = &delivered[0];
        assert_eq!(file_name, "yahoo_auction_export.zip");
        assert_eq!(
            entry_names(archive),
            vec!["yahoo_auction_items.csv", "1.jpg", "2.jpg", "3.jpg"]
        );
        // Global counter across items
        assert_eq!(entry_data(archive, "3.jpg"), b"https://img/c1".to_vec());

        let csv = String::from_utf8(entry_data(archive, "yahoo_auction_items.csv")).unwrap();
        assert!(csv.starts_with('\u{FEFF}'));
        assert_eq!(csv.lines().count(), 4);

        assert_eq!(
            fetcher.calls(),
            vec!["https://img/a1", "https://img/a2", "https://img/c1"]
        );
    }

    #[tokio::test]
    async fn test_second_image_failure_aborts_export() {
        let fetcher = Arc::new(ScriptedFetcher::failing_on("https://img/2"));
        let sink = Arc::new(RecordingSink::default());
        let coordinator = coordinator(LotpackConfig::default(), fetcher.clone(), sink.clone());
        let items = vec![item(
            "A",
            &[("one", "https://img/1"), ("two", "https://img/2")],
        )];

        let err = coordinator.execute_export(&items).await.unwrap_err();

        match err {
            LotpackError::ImageFetch { position, url, .. } => {
                assert_eq!(position, 2);
                assert_eq!(url, "https://img/2");
            }
            other => panic!("expected image fetch error, got {other:?}"),
        }
        assert!(sink.delivered().is_empty(), "no archive may be delivered");
    }

    #[tokio::test]
    async fn test_failure_stops_sequential_fetching() {
        let fetcher = Arc::new(ScriptedFetcher::failing_on("https://img/1"));
        let sink = Arc::new(RecordingSink::default());
        let coordinator = coordinator(LotpackConfig::default(), fetcher.clone(), sink);
        let items = vec![item(
            "A",
            &[("one", "https://img/1"), ("two", "https://img/2")],
        )];

        assert!(coordinator.execute_export(&items).await.is_err());
        assert_eq!(fetcher.calls(), vec!["https://img/1"]);
    }

    #[tokio::test]
    async fn test_concurrent_fetch_keeps_entry_order() {
        let mut config = LotpackConfig::default();
        config.fetch.concurrency = 4;
        let fetcher = Arc::new(ScriptedFetcher::default());
        let sink = Arc::new(RecordingSink::default());
        let coordinator = coordinator(config, fetcher, sink);
        let images: Vec<(String, String)> = (1..=6)
            .map(|i| (format!("img{i}"), format!("https://img/{i}")))
            .collect();
        let image_refs: Vec<(&str, &str)> = images
            .iter()
            .map(|(n, u)| (n.as_str(), u.as_str()))
            .collect();
        let items = vec![item("A", &image_refs)];

        let entries = coordinator.fetch_images(&items).await.unwrap();

        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["1.jpg", "2.jpg", "3.jpg", "4.jpg", "5.jpg", "6.jpg"]);
        assert_eq!(entries[4].data, b"https://img/5".to_vec());
    }

    #[tokio::test]
    async fn test_dry_run_fetches_and_writes_nothing() {
        let mut config = LotpackConfig::default();
        config.application.dry_run = true;
        let fetcher = Arc::new(ScriptedFetcher::default());
        let sink = Arc::new(RecordingSink::default());
        let coordinator = coordinator(config, fetcher.clone(), sink.clone());
        let items = vec![item("A", &[("one", "https://img/1")])];

        let summary = coordinator.execute_export(&items).await.unwrap();

        assert!(summary.dry_run);
        assert_eq!(summary.total_rows, 1);
        assert_eq!(summary.images_fetched, 0);
        assert!(summary.output_path.is_none());
        assert!(fetcher.calls().is_empty());
        assert!(sink.delivered().is_empty());
    }

    #[tokio::test]
    async fn test_custom_entry_names() {
        let mut config = LotpackConfig::default();
        config.archive.csv_name = "listings.csv".to_string();
        config.archive.image_extension = "png".to_string();
        config.archive.file_name = "batch.zip".to_string();
        let sink = Arc::new(RecordingSink::default());
        let coordinator = coordinator(config, Arc::new(ScriptedFetcher::default()), sink.clone());

        coordinator
            .execute_export(&[item("A", &[("one", "https://img/1")])])
            .await
            .unwrap();

        let delivered = sink.delivered();
        assert_eq!(delivered[0].0, "batch.zip");
        assert_eq!(entry_names(&delivered[0].1), vec!["listings.csv", "1.png"]);
    }

    #[test]
    fn test_build_rows_in_record_then_image_order() {
        let coordinator = coordinator(
            LotpackConfig::default(),
            Arc::new(ScriptedFetcher::default()),
            Arc::new(RecordingSink::default()),
        );
        let items = vec![
            item("first", &[("x", "https://img/x"), ("y", "https://img/y")]),
            item("second", &[("z", "https://img/z")]),
        ];

        let rows = coordinator.build_rows(&items);

        let categories: Vec<&str> = rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(categories, vec!["first", "first", "second"]);
        assert!(rows[1][1].starts_with("y（2）"));
        assert!(rows[2][1].starts_with("z（1）"));
    }
}
