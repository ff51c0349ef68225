use sha2::{Digest, Sha256};

pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Fingerprint of a corpus in the order it was supplied.
pub fn corpus_fingerprint<S: AsRef<str>>(corpus: &[S]) -> String {
    let mut buf = String::new();
    for (i, entry) in corpus.iter().enumerate() {
        if i > 0 {
            buf.push('\n');
        }
        buf.push_str(entry.as_ref());
    }
    format!("corpus_{}", sha256_hex(buf.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_depends_on_order() {
        let a = corpus_fingerprint(&["paypal.com", "ebay.com"]);
        let b = corpus_fingerprint(&["ebay.com", "paypal.com"]);
        assert_ne!(a, b);
        assert_eq!(a, corpus_fingerprint(&["paypal.com", "ebay.com"]));
    }

    #[test]
    fn sha256_of_empty_input() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
