#![no_main]
use bytescan_core::{find_first, find_first_n, find_last_byte, trimmed_len};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Layout: [split, needle, source_len, pattern bytes.., source bytes..]
    if data.len() < 3 {
        return;
    }
    let split = usize::from(data[0]) % 8;
    let needle = data[1];
    let declared = usize::from(data[2]);
    let rest = &data[3..];
    let split = split.min(rest.len());
    let (pattern, source) = rest.split_at(split);

    let found = find_first(source, pattern);
    let oracle = if pattern.is_empty() {
        Some(0)
    } else {
        source.windows(pattern.len()).position(|w| w == pattern)
    };
    assert_eq!(found, oracle);

    match find_first_n(source, declared, pattern, pattern.len()) {
        Ok(found) => {
            assert!(declared <= source.len());
            assert_eq!(found, find_first(&source[..declared], pattern));
        }
        Err(_) => assert!(declared > source.len()),
    }

    let trimmed = trimmed_len(source);
    assert!(trimmed <= source.len());
    assert!(source[trimmed..].iter().all(|&b| b == 0));
    assert!(trimmed == 0 || source[trimmed - 1] != 0);

    if let Ok(Some(i)) = find_last_byte(source, needle, source.len()) {
        assert_eq!(source[i], needle);
        assert!(source[i + 1..].iter().all(|&b| b != needle));
    }
});
