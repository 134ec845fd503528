#![no_main]
use jsonaccess::Segment;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&[u8], Vec<String>, Vec<i64>)| {
    let (document, keys, indices) = data;
    let value = jsonaccess::parse(document);
    let mut path: Vec<Segment<'_>> = Vec::with_capacity(keys.len() + indices.len());
    for (key, index) in keys.iter().zip(indices.iter().chain(std::iter::repeat(&0))) {
        path.push(Segment::from(key));
        path.push(Segment::from(*index));
    }
    let joined = value.get(&path);
    let mut stepwise = vec![value.clone()];
    for segment in &path {
        let Some(last) = stepwise.last() else {
            return;
        };
        let next = last.get([segment]);
        stepwise.push(next);
    }
    if let Some(last) = stepwise.last() {
        assert_eq!(joined.is_valid(), last.is_valid());
        assert_eq!(joined.raw(), last.raw());
    }
});
