use globalign_alignment_rs::pairwise::{global, scoring, Config, Engine, Error, Layout, Which};

type Score = i32;
type Symbol = u8;

struct Workload<'a> {
    seq1: &'a str,
    seq2: &'a str,
    score: Score,
    rle: &'a str,
    aligned: (&'a str, &'a str),
}

fn ensure(config: &Config<Score>, w: Workload<'_>) {
    let engine = Engine::<Score, Symbol, _>::from_config(config);
    let alignment = engine
        .align(&w.seq1.as_bytes(), &w.seq2.as_bytes())
        .unwrap_or_else(|err| panic!("Aligner failed: {} & {}: {err:?}", w.seq1, w.seq2));
    assert_eq!(*alignment.score(), w.score);
    assert_eq!(alignment.rle(), w.rle);

    let result = global::align(w.seq1, w.seq2, config).unwrap();
    assert_eq!(
        result.dissolve(),
        (w.aligned.0.to_string(), w.aligned.1.to_string(), w.score)
    );
}

#[test]
fn test_default_scoring() {
    let config = Config::default();
    for w in [
        Workload {
            seq1: "AGCT",
            seq2: "AGCT",
            score: 6,
            rle: "4=",
            aligned: ("AGCT", "AGCT"),
        },
        Workload {
            seq1: "A",
            seq2: "A",
            score: 0,
            rle: "1=",
            aligned: ("A", "A"),
        },
        Workload {
            seq1: "AGCT",
            seq2: "AG",
            score: -2,
            rle: "2=2^",
            aligned: ("AGCT", "AG--"),
        },
        Workload {
            seq1: "AG",
            seq2: "AGCT",
            score: -2,
            rle: "2=2v",
            aligned: ("AG--", "AGCT"),
        },
        Workload {
            seq1: "A",
            seq2: "CGA",
            score: -4,
            rle: "1X2v",
            aligned: ("A--", "CGA"),
        },
        Workload {
            seq1: "T",
            seq2: "G",
            score: 0,
            rle: "1X",
            aligned: ("T", "G"),
        },
    ] {
        ensure(&config, w);
    }
}

#[test]
fn test_ties_prefer_up() {
    // All three predecessors of the last cell score -4
    let config = Config::new(-2, -4, 2, Layout::Unpadded);
    ensure(
        &config,
        Workload {
            seq1: "AC",
            seq2: "AG",
            score: -4,
            rle: "1=1v1^",
            aligned: ("A-C", "AG-"),
        },
    );
}

#[test]
fn test_padded_layout() {
    let config = Config {
        layout: Layout::Padded,
        ..Config::default()
    };
    ensure(
        &config,
        Workload {
            seq1: "AGCT",
            seq2: "AGCT",
            score: 8,
            rle: "4=",
            aligned: ("AGCT", "AGCT"),
        },
    );
    ensure(
        &config,
        Workload {
            seq1: "T",
            seq2: "G",
            score: -1,
            rle: "1X",
            aligned: ("T", "G"),
        },
    );
}

#[test]
fn test_custom_scheme() {
    let mut engine = Engine::new(
        scoring::compose(
            scoring::symbols::Equality::<Score, Symbol>::new(1, -1),
            scoring::gaps::Linear::new(-1),
            scoring::equiv::Equality::new(),
        ),
        Layout::Unpadded,
    );
    let (seq1, seq2): (&[u8], &[u8]) = (b"AGCT", b"AG");

    let alignment = engine.align(&seq1, &seq2).unwrap();
    assert_eq!(*alignment.score(), -1);
    assert_eq!(alignment.rle(), "2=2^");

    engine.with_scoring(scoring::compose(
        scoring::symbols::Equality::new(5, 0),
        scoring::gaps::Linear::new(0),
        scoring::equiv::Equality::new(),
    ));
    let alignment = engine.align(&seq1, &seq2).unwrap();
    assert_eq!(*alignment.score(), 5);
}

#[test]
fn test_empty_input() {
    let config = Config::default();
    for (seq1, seq2, which) in [
        ("", "ACGT", Which::First),
        ("ACGT", "", Which::Second),
        ("", "", Which::First),
    ] {
        let err = global::align(seq1, seq2, &config).unwrap_err();
        assert_eq!(
            err.downcast_ref::<Error>(),
            Some(&Error::EmptySequence { which })
        );
    }
}

#[test]
fn test_deterministic() {
    let config = Config::default();
    let first = global::align("GATTACA", "GCATGCU", &config).unwrap();
    for _ in 0..8 {
        assert_eq!(global::align("GATTACA", "GCATGCU", &config).unwrap(), first);
    }
}
