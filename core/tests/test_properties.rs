// Property-based checks for front coding:
//
// * round trip over arbitrary and sorted corpora
// * prefix correctness of `common_prefix_length`
// * first-record baseline

#[cfg(test)]
mod tests {
    use frontcode_core::compression::{
        common_prefix_length, split_lines, CodecConfig, FrontCoder, LineEnding,
    };
    use proptest::prelude::*;

    /// Lines hold no terminator (`\n` or `\r`).
    fn line() -> impl Strategy<Value = String> {
        "[a-c é日 0-9]{0,12}"
    }

    fn corpus() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(line(), 0..40)
    }

    fn terminated(lines: &[String], terminator: &str) -> String {
        lines.iter().map(|l| format!("{l}{terminator}")).collect()
    }

    proptest! {
        #[test]
        fn prop_round_trip_is_exact(lines in corpus()) {
            let coder = FrontCoder::default();
            let text = terminated(&lines, "\n");
            let decoded = coder.decode(&coder.encode(&text)).unwrap();
            prop_assert_eq!(decoded, text);
        }

        #[test]
        fn prop_round_trip_sorted(mut lines in corpus()) {
            lines.sort();
            let coder = FrontCoder::default();
            let text = terminated(&lines, "\n");
            let encoded = coder.encode(&text);
            let decoded = coder.decode(&encoded).unwrap();
            let got: Vec<&str> = split_lines(&decoded).collect();
            prop_assert_eq!(got, lines.iter().map(String::as_str).collect::<Vec<_>>());
        }

        #[test]
        fn prop_round_trip_crlf(lines in corpus()) {
            let config = CodecConfig::default().with_line_ending(LineEnding::CrLf);
            let coder = FrontCoder::new(config);
            let text = terminated(&lines, "\r\n");
            let decoded = coder.decode(&coder.encode(&text)).unwrap();
            prop_assert_eq!(decoded, text);
        }

        #[test]
        fn prop_one_record_per_line(lines in corpus()) {
            let coder = FrontCoder::default();
            let records = coder.encode_records(&terminated(&lines, "\n"));
            prop_assert_eq!(records.len(), lines.len());
            if let Some(first) = records.first() {
                prop_assert_eq!(first.prefix_len, 0);
            }
        }

        #[test]
        fn prop_common_prefix_is_longest(a in "[ab é]{0,8}", b in "[ab é]{0,8}") {
            let k = common_prefix_length(&a, &b);
            prop_assert!(k <= a.len().min(b.len()));
            prop_assert_eq!(&a[..k], &b[..k]);
            prop_assert!(
                k == a.len() || k == b.len() || a[k..].chars().next() != b[k..].chars().next()
            );
            prop_assert_eq!(k, common_prefix_length(&b, &a));
        }
    }
}
