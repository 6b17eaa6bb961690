//! End-to-end: load a dataset file, draw an experiment, rank it, export it.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::tempdir;

use vcsort_core::dataset::{load_dataset, DatasetSource};
use vcsort_core::email::{order_summary, EmailConfig, EmailForm, EmailJsClient, ORDER_FIELD};
use vcsort_core::export::{format_csv, write_csv, CSV_FILE_NAME};
use vcsort_core::ranking::Session;

fn dataset_json(count: usize) -> String {
    let entries: Vec<String> = (1..=count)
        .map(|i| {
            format!(
                r#"{{"id": "../public/swarm-videos//111407.893-PM-25-Aug-2025_vision={i}.0_minsep=1.5_maxalign=10_maxcohere=3.0_maxsep=1.5_population=4{i}.mp4", "name": "VID000{i}_swarm.mp4", "correctComplexity": {i}}}"#
            )
        })
        .collect();
    format!("[{}]", entries.join(","))
}

#[tokio::test]
async fn load_rank_and_export() {
    let dir = tempdir().unwrap();
    let dataset_path = dir.path().join("videos.json");
    std::fs::write(&dataset_path, dataset_json(8)).unwrap();

    let report = load_dataset(&DatasetSource::File(dataset_path), "../public")
        .await
        .unwrap();
    assert_eq!(report.items.len(), 8);
    assert!(report.rejected.is_empty());

    let mut rng = StdRng::seed_from_u64(42);
    let mut session = Session::start(report.items, 5, true, &mut rng);
    assert!(session.is_experiment_mode());
    assert_eq!(session.list().len(), 5);

    // Drag the last item onto the first.
    let ids: Vec<String> = session.list().items().iter().map(|v| v.id.clone()).collect();
    assert!(session.list_mut().reorder_by_identity(&ids[4], &ids[0]));
    let reordered: Vec<String> = session.list().items().iter().map(|v| v.id.clone()).collect();
    assert_eq!(
        reordered,
        vec![
            ids[4].clone(),
            ids[0].clone(),
            ids[1].clone(),
            ids[2].clone(),
            ids[3].clone()
        ]
    );

    assert!(session.list_mut().finalize());
    assert!(session
        .list()
        .status()
        .unwrap()
        .contains("You ranked 5 videos"));

    let csv = format_csv(session.list().items());
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[1].starts_with("1,\""));
    assert!(lines[1].contains(",1.5,10,3.0,1.5,4"));

    let out = dir.path().join("out").join(CSV_FILE_NAME);
    let rows = write_csv(&out, session.list().items()).unwrap();
    assert_eq!(rows, 5);
    assert_eq!(std::fs::read_to_string(&out).unwrap(), csv);
}

#[tokio::test]
async fn reset_returns_whole_pool() {
    let dir = tempdir().unwrap();
    let dataset_path = dir.path().join("videos.json");
    std::fs::write(&dataset_path, dataset_json(7)).unwrap();

    let report = load_dataset(&DatasetSource::File(dataset_path), "../public")
        .await
        .unwrap();

    let mut rng = StdRng::seed_from_u64(7);
    let mut session = Session::start(report.items, 5, true, &mut rng);
    assert!(session.can_reset());

    session.reset_to_full(&mut rng);
    assert_eq!(session.list().len(), 7);
    assert!(!session.can_reset());

    let mut ids: Vec<&str> = session.list().items().iter().map(|v| v.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 7);
}

#[test]
fn email_request_lists_current_order() {
    let mut rng = StdRng::seed_from_u64(3);
    let pool: Vec<_> = (1..=3)
        .map(|i| {
            vcsort_core::models::VideoItem::from_entry(
                &format!("/v/{i}.mp4"),
                &format!("VID{i}.mp4"),
                "",
            )
            .with_target_complexity(i.to_string())
        })
        .collect();
    let session = Session::start(pool, 5, false, &mut rng);

    let client = EmailJsClient::new(EmailConfig {
        service_id: "s".into(),
        template_id: "t".into(),
        public_key: "k".into(),
        ..Default::default()
    });
    let form = EmailForm {
        from_name: "Ranker".into(),
        from_email: "ranker@example.com".into(),
        message: String::new(),
    };

    let request = client.build_request(&form, session.list().items()).unwrap();
    assert_eq!(
        request.template_params[ORDER_FIELD],
        order_summary(session.list().items())
    );
    assert_eq!(request.template_params[ORDER_FIELD].lines().count(), 4);
}
