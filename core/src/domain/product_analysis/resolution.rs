//! Barcode resolution pipeline as a pure state machine.
//!
//! `transition` decides the next state and the single effect the driver has
//! to run; the driver feeds the effect's outcome back as the next event.

use crate::domain::{
    common::entities::app_errors::CoreError,
    product_analysis::{
        entities::{ProductAnalysis, ResolutionOrigin},
        value_objects::{AnalyzedProduct, ProductRecord},
    },
};

pub const LOOKUP_FAILED_MESSAGE: &str = "Sorry, I couldn't find or analyze this product.";
pub const IMAGE_FAILED_MESSAGE: &str = "Sorry, I couldn't analyze this image.";

#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionState {
    Idle,
    CacheCheck { barcode: String },
    SourceLookup { barcode: String },
    AiStructured { barcode: String },
    AiWebSearch { barcode: String },
    Resolved {
        analysis: ProductAnalysis,
        origin: ResolutionOrigin,
    },
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionEvent {
    Start { barcode: String },
    CacheHit(ProductAnalysis),
    CacheMiss,
    SourceFound(ProductRecord),
    SourceFailed(CoreError),
    AnalysisSucceeded(AnalyzedProduct),
    AnalysisFailed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    CheckCache { barcode: String },
    LookupSource { barcode: String },
    AnalyzeStructured { record: ProductRecord },
    SearchWeb { barcode: String },
    /// Prepend the analysis to history and persist it.
    Record(ProductAnalysis),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: ResolutionState,
    pub effect: Option<Effect>,
}

impl Transition {
    fn to(state: ResolutionState, effect: Effect) -> Self {
        Self {
            state,
            effect: Some(effect),
        }
    }

    fn settle(state: ResolutionState) -> Self {
        Self {
            state,
            effect: None,
        }
    }
}

pub fn transition(state: ResolutionState, event: ResolutionEvent) -> Transition {
    use ResolutionEvent as E;
    use ResolutionState as S;

    match (state, event) {
        (S::Idle, E::Start { barcode }) => Transition::to(
            S::CacheCheck {
                barcode: barcode.clone(),
            },
            Effect::CheckCache { barcode },
        ),

        (S::CacheCheck { .. }, E::CacheHit(analysis)) => Transition::settle(S::Resolved {
            analysis,
            origin: ResolutionOrigin::History,
        }),
        (S::CacheCheck { barcode }, E::CacheMiss) => Transition::to(
            S::SourceLookup {
                barcode: barcode.clone(),
            },
            Effect::LookupSource { barcode },
        ),

        (S::SourceLookup { barcode }, E::SourceFound(record)) => Transition::to(
            S::AiStructured { barcode },
            Effect::AnalyzeStructured { record },
        ),
        (S::SourceLookup { barcode }, E::SourceFailed(_)) => search_web(barcode),

        (S::AiStructured { barcode }, E::AnalysisSucceeded(product)) => {
            resolve(barcode, product, ResolutionOrigin::ProductSource)
        }
        (S::AiStructured { barcode }, E::AnalysisFailed) => search_web(barcode),

        (S::AiWebSearch { barcode }, E::AnalysisSucceeded(product)) => {
            resolve(barcode, product, ResolutionOrigin::WebSearch)
        }
        (S::AiWebSearch { .. }, E::AnalysisFailed) => fail(),

        (state @ (S::Resolved { .. } | S::Failed { .. }), _) => Transition::settle(state),

        (state, event) => {
            tracing::error!(?state, ?event, "Unexpected resolution event");
            fail()
        }
    }
}

fn search_web(barcode: String) -> Transition {
    Transition::to(
        ResolutionState::AiWebSearch {
            barcode: barcode.clone(),
        },
        Effect::SearchWeb { barcode },
    )
}

fn resolve(barcode: String, product: AnalyzedProduct, origin: ResolutionOrigin) -> Transition {
    let analysis = product.identify(barcode.clone(), Some(barcode));
    Transition::to(
        ResolutionState::Resolved {
            analysis: analysis.clone(),
            origin,
        },
        Effect::Record(analysis),
    )
}

fn fail() -> Transition {
    Transition::settle(ResolutionState::Failed {
        message: LOOKUP_FAILED_MESSAGE.to_string(),
    })
}
