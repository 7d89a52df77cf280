//! Deterministic instance ordering for level output.

use crate::instance::ItemInstance;
use bearkit_schema::pool::ClassPool;
use std::cmp::Ordering;

/// Order instances by place: left edge, then bottom edge, then class
/// name, then identifier. Used to emit layer contents deterministically.
#[must_use]
pub fn by_place(pool: &ClassPool, a: &ItemInstance, b: &ItemInstance) -> Ordering {
    a.rendering()
        .left()
        .total_cmp(&b.rendering().left())
        .then_with(|| a.rendering().bottom().total_cmp(&b.rendering().bottom()))
        .then_with(|| {
            pool.class(a.class_id())
                .class_name()
                .cmp(pool.class(b.class_id()).class_name())
        })
        .then_with(|| a.id().cmp(b.id()))
}
