#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Split the input into a text and a query; exercise every mismatch
    // mode and check that reported offsets stay in bounds
    if data.len() < 2 {
        return;
    }
    let split = (data[0] as usize % (data.len() - 1)) + 1;
    let (text, query) = (&data[1..split], &data[split..]);
    if text.is_empty() || query.is_empty() || query.len() > 16 {
        return;
    }
    // The sentinel byte cannot appear in the indexed text
    if text.contains(&0) {
        return;
    }

    let fwd = fmx::index::FmIndex::build(text.to_vec(), 4);
    let rev = fmx::index::FmIndex::build(text.iter().rev().copied().collect(), 4);
    let searcher = fmx::query::Searcher::new(&fwd, &rev);

    for k in 0..=2u8 {
        let raw = searcher.search(query, k, true, None);
        let results = fmx::query::aggregate(raw, 8);
        for candidate in &results.candidates {
            assert!(candidate.offset + query.len() <= text.len());
        }
    }
});
