/// `tf_idf = importance * (1 + log10(tf)) * log10(N / df)`.
///
/// `df` is the posting-list length at rewrite time, not an incrementally
/// maintained count. When `df == total_docs` the idf term is zero: a term
/// in every document carries no discriminating weight.
pub fn tf_idf(importance: u32, tf: u32, total_docs: u64, df: u64) -> f64 {
    if tf == 0 || df == 0 || total_docs == 0 {
        return 0.0;
    }

    let tf_component = 1.0 + (tf as f64).log10();
    let idf_component = ((total_docs as f64) / (df as f64)).log10();

    importance as f64 * tf_component * idf_component
}
