//! Pipeline runner — threads a document through tokenize → normalize →
//! dedupe → classify against an immutable [`Lexicon`].
//!
//! The run is single-threaded and synchronous per document: input is
//! bounded and in memory, so no stage suspends or blocks. Per-document
//! state (token buffers, dedup maps, result buckets) is private to the
//! call; the lexicon is only ever read.

use crate::lexicon::Lexicon;
use crate::pipeline::classifier::classify;
use crate::pipeline::dedup::dedupe;
use crate::pipeline::normalizer::Normalizer;
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, STAGE_CLASSIFY, STAGE_DEDUPE,
    STAGE_NORMALIZE, STAGE_TOKENIZE,
};
use crate::pipeline::tokenizer::tokenize;
use crate::types::{Classification, TokenizeMode};

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// A classification pipeline bound to one lexicon and one tokenization mode.
///
/// The lexicon is borrowed read-only; a `Pipeline` may classify any number
/// of documents, and independent pipelines may share one lexicon across
/// threads without locking.
#[derive(Debug, Clone, Copy)]
pub struct Pipeline<'a> {
    lexicon: &'a Lexicon,
    mode: TokenizeMode,
}

impl<'a> Pipeline<'a> {
    pub fn new(lexicon: &'a Lexicon, mode: TokenizeMode) -> Self {
        Self { lexicon, mode }
    }

    pub fn mode(&self) -> TokenizeMode {
        self.mode
    }

    /// Classify one document.
    pub fn classify(&self, document: &str) -> Classification {
        self.classify_observed(document, &mut NoopObserver)
    }

    /// Classify one document, reporting stage boundaries to `observer`.
    ///
    /// Stages run in order:
    /// 1. Tokenize (whitespace split, optionally phrase-grouped)
    /// 2. Normalize (lemma resolution; empty tokens are skipped here)
    /// 3. Dedupe (one entry per lemma, lexicographic order)
    /// 4. Classify (known / unknown / broken partition)
    pub fn classify_observed(
        &self,
        document: &str,
        observer: &mut impl PipelineObserver,
    ) -> Classification {
        // Stage 0: tokenize
        trace_stage!(STAGE_TOKENIZE);
        observer.on_stage_start(STAGE_TOKENIZE);
        let clock = StageClock::start();
        let tokens = tokenize(document, self.mode);
        observer.on_stage_end(
            STAGE_TOKENIZE,
            &StageReport::with_items(clock.elapsed(), tokens.len()),
        );
        observer.on_tokens(&tokens);

        // Stage 1: normalize
        trace_stage!(STAGE_NORMALIZE);
        observer.on_stage_start(STAGE_NORMALIZE);
        let clock = StageClock::start();
        let normalizer = Normalizer::new(&self.lexicon.lemmas);
        let lemmas: Vec<(String, Option<String>)> = tokens
            .into_iter()
            .filter_map(|token| {
                normalizer
                    .normalize(token.text)
                    .map(|lemma| (lemma, token.phrase))
            })
            .collect();
        observer.on_stage_end(
            STAGE_NORMALIZE,
            &StageReport::with_items(clock.elapsed(), lemmas.len()),
        );

        // Stage 2: dedupe
        trace_stage!(STAGE_DEDUPE);
        observer.on_stage_start(STAGE_DEDUPE);
        let clock = StageClock::start();
        let unique = dedupe(lemmas);
        observer.on_stage_end(
            STAGE_DEDUPE,
            &StageReport::with_items(clock.elapsed(), unique.len()),
        );
        observer.on_unique_lemmas(&unique);

        // Stage 3: classify
        trace_stage!(STAGE_CLASSIFY);
        observer.on_stage_start(STAGE_CLASSIFY);
        let clock = StageClock::start();
        let result = classify(unique, &self.lexicon.known, &self.lexicon.frequencies);
        observer.on_stage_end(
            STAGE_CLASSIFY,
            &StageReport::with_items(clock.elapsed(), result.len()),
        );
        observer.on_result(&result);

        result
    }
}
