use crate::LineTraceResult;
use crate::mask::BilevelMask;

/// A trait representing an algorithm that can turn a bilevel mask into a vector representation.
pub trait MaskVectorizer {
    type Options;
    type Output;

    fn vectorize(
        &self,
        mask: &BilevelMask,
        options: &Self::Options,
    ) -> LineTraceResult<Self::Output>;
}

pub mod path;
