// Example: a complete viewer loop without a UI — load a dataset through
// the worker, poll the resource until it settles, then window the rows.
use scoreview::{SortKey, SortOrder, WindowOptions, compute_window};
use scoreview_worker::{
    RecordSource, RequestBroker, Resource, ResourceSlot, ResourceState, TaskError,
};
use serde_json::{Value, json};

struct GeneratedSource;

impl RecordSource for GeneratedSource {
    fn fetch(&self, _url: &str) -> Result<Value, TaskError> {
        let rows: Vec<Value> = (0..10_000u64)
            .map(|i| json!([i.to_string(), format!("item {i}"), (i % 11) as f64]))
            .collect();
        Ok(Value::Array(rows))
    }
}

fn main() {
    let (broker, _worker) = RequestBroker::spawn(GeneratedSource).expect("spawn worker");

    let mut slot = ResourceSlot::new();
    slot.install(Resource::new(broker.load(
        "memory://results.json",
        SortKey::Score,
        SortOrder::Desc,
    )));

    // A rendering layer would poll once per frame; here we just spin.
    let total = loop {
        match slot.read().expect("resource installed") {
            ResourceState::Pending => std::thread::yield_now(),
            ResourceState::Ready(records) => break records.len(),
            ResourceState::Failed(e) => panic!("load failed: {e}"),
        }
    };

    let opts = WindowOptions::new(44).with_overscan(10);
    let w = compute_window(total, 44 * 4_000, 800, &opts);
    println!(
        "{} rows total, materializing [{}..{}) with leading={} trailing={}",
        total, w.start_index, w.end_index, w.leading_extent, w.trailing_extent
    );

    // The user flips the sort; a new resource supersedes the old one.
    slot.install(Resource::new(broker.sort(SortKey::Time, SortOrder::Asc)));
    let Some(current) = slot.current() else {
        unreachable!()
    };
    println!("now showing request #{}", current.request_id());
}
