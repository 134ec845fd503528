#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let value = jsonaccess::parse(data);
    let Ok(text) = value.stringify() else {
        return;
    };
    let reparsed = jsonaccess::parse(text.as_str());
    assert_eq!(reparsed.raw(), value.raw());
    let _ = value.as_string();
    let _ = value.as_i64();
    let _ = value.as_f64();
    let _ = value.as_bool();
});
