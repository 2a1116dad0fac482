use crate::record::AppRecord;

/// Collect the non-empty iOS schemes in input order.
///
/// Duplicates are kept and scheme syntax is not checked.
pub fn collect_schemes(records: &[AppRecord]) -> Vec<String> {
    let schemes: Vec<String> = records
        .iter()
        .enumerate()
        .filter_map(|(index, r)| match r.scheme() {
            Some(scheme) => Some(scheme.to_string()),
            None => {
                tracing::debug!(index, "skipping record without ios scheme");
                None
            }
        })
        .collect();
    tracing::debug!(
        records = records.len(),
        schemes = schemes.len(),
        "collected url schemes"
    );
    schemes
}
