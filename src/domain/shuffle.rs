//! 随机打乱
//!
//! 对整个集合做均匀随机的全排列（Fisher-Yates），返回新的 Vec，源集合保持不变。

use rand::seq::SliceRandom;
use rand::Rng;

/// 使用线程本地随机源打乱
pub fn shuffled<T: Clone>(items: &[T]) -> Vec<T> {
    shuffled_with(items, &mut rand::thread_rng())
}

/// 使用指定随机源打乱
pub fn shuffled_with<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}
