//! Property-based tests for the similarity engine

use nvdb_domain::{EmbeddingVector, NewsRecord, cosine_similarity, rank_and_filter};
use proptest::prelude::*;

const DIM: usize = 8;

fn vector_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-100.0f64..100.0, DIM)
}

fn non_zero_vector_strategy() -> impl Strategy<Value = Vec<f64>> {
    vector_strategy().prop_filter("non-zero magnitude", |v| {
        v.iter().map(|x| x * x).sum::<f64>() > 1e-6
    })
}

fn corpus_strategy() -> impl Strategy<Value = Vec<NewsRecord>> {
    prop::collection::vec(vector_strategy(), 0..40).prop_map(|vectors| {
        vectors
            .into_iter()
            .enumerate()
            .map(|(i, v)| {
                let text = EmbeddingVector::new(v).to_json().unwrap();
                NewsRecord::new(format!("n{i}")).with_embedding(text)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_cosine_is_symmetric(a in vector_strategy(), b in vector_strategy()) {
        let ab = cosine_similarity(&a, &b).unwrap();
        let ba = cosine_similarity(&b, &a).unwrap();
        prop_assert!((ab - ba).abs() < 1e-12);
    }

    #[test]
    fn prop_self_similarity_is_one(v in non_zero_vector_strategy()) {
        let score = cosine_similarity(&v, &v).unwrap();
        prop_assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn prop_cosine_is_bounded(a in vector_strategy(), b in vector_strategy()) {
        let score = cosine_similarity(&a, &b).unwrap();
        prop_assert!((-1.0 - 1e-9..=1.0 + 1e-9).contains(&score));
    }

    #[test]
    fn prop_ranked_output_is_bounded_and_sorted(
        query in vector_strategy(),
        corpus in corpus_strategy(),
        threshold in -1.0f64..1.0,
        top_k in -2i64..20,
    ) {
        let query = EmbeddingVector::new(query);
        let ranked = rank_and_filter(&query, &corpus, threshold, top_k);

        let limit = usize::try_from(top_k).unwrap_or(0);
        prop_assert!(ranked.results.len() <= limit);
        prop_assert!(ranked.results.len() <= ranked.total_above_threshold);
        prop_assert_eq!(ranked.total_compared, corpus.len());
        prop_assert!(ranked.results.iter().all(|r| r.score >= threshold));
        prop_assert!(ranked.results.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn prop_ties_keep_candidate_order(
        query in non_zero_vector_strategy(),
        copies in 2usize..10,
    ) {
        let text = EmbeddingVector::new(query.clone()).to_json().unwrap();
        let corpus: Vec<NewsRecord> = (0..copies)
            .map(|i| NewsRecord::new(format!("{i:03}")).with_embedding(text.clone()))
            .collect();

        let ranked = rank_and_filter(&EmbeddingVector::new(query), &corpus, -1.0, 100);
        let ids: Vec<_> = ranked.results.iter().map(|r| r.news_id.clone()).collect();
        let expected: Vec<_> = corpus.iter().map(|r| r.news_id.clone()).collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn prop_raising_threshold_never_adds_results(
        query in vector_strategy(),
        corpus in corpus_strategy(),
        low in -1.0f64..1.0,
        delta in 0.0f64..1.0,
    ) {
        let query = EmbeddingVector::new(query);
        let high = low + delta;
        let loose = rank_and_filter(&query, &corpus, low, i64::MAX);
        let strict = rank_and_filter(&query, &corpus, high, i64::MAX);

        prop_assert!(strict.results.len() <= loose.results.len());
        for result in &strict.results {
            prop_assert!(loose.results.iter().any(|r| r.news_id == result.news_id));
        }
    }
}
