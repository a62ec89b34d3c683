use std::cmp::Ordering;

use log::{debug, trace};

use crate::error::TransformError;

/// Subarrays at or below this many elements (plus one) go to insertion sort.
const CUTOFF: usize = 11;

/// The sorted order of the N circular suffixes (rotations) of a buffer.
///
/// `index(i) == j` means the rotation starting at offset `j` has rank `i`. For the buffer
/// `ABRACADABRA!` the ranks are:
///
/// ```text
///  rank   sorted rotation             offset
///    0    ! A B R A C A D A B R A       11
///    1    A ! A B R A C A D A B R       10
///    2    A B R A ! A B R A C A D        7
///    3    A B R A C A D A B R A !        0
///   ..
///   11    R A C A D A B R A ! A B        2
/// ```
///
/// Rotations that are byte-for-byte identical (a periodic buffer such as `abab`) are ordered
/// by their starting position: the one starting further into the buffer sorts first. The
/// order among identical rotations carries no meaning, but it is fixed so that the transform
/// is reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircularSuffixArray {
    index: Vec<usize>,
}

impl CircularSuffixArray {
    /// Sort the circular suffixes of `text`. An empty buffer yields an empty array.
    pub fn new(text: &[u8]) -> Self {
        let mut index = (0..text.len()).collect::<Vec<usize>>();
        suffix_q_sort3(&mut index, text);
        debug!("Sorted {} circular suffixes.", index.len());
        Self { index }
    }

    /// Length of the buffer the array was built from.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns the offset of the rotation with the given rank.
    pub fn index(&self, rank: usize) -> Result<usize, TransformError> {
        self.index
            .get(rank)
            .copied()
            .ok_or(TransformError::IndexOutOfRange {
                index: rank,
                len: self.index.len(),
            })
    }

    /// The full permutation, by rank.
    pub fn as_slice(&self) -> &[usize] {
        &self.index
    }
}

/// Three-way string quicksort over circular suffixes.
///
/// Ranges are kept half open and pushed onto a work stack instead of recursing, so deep
/// partitions on repetitive input cannot overflow the call stack. Each stack entry is
/// (lo, hi, depth), and every range popped is disjoint from every other range on the stack.
fn suffix_q_sort3(index: &mut [usize], text: &[u8]) {
    let n = text.len();
    let mut stack: Vec<(usize, usize, usize)> = Vec::with_capacity(64);
    stack.push((0, n, 0));

    while let Some((lo, hi, d)) = stack.pop() {
        if hi <= lo + CUTOFF + 1 {
            insertion_sort(&mut index[lo..hi], text, d);
            continue;
        }

        // Dutch flag partition on the character at depth d:
        // index[lo..lt] < pivot == index[lt..=gt] < index[gt+1..hi]
        let pivot = text[(index[lo] + d) % n];
        let mut lt = lo;
        let mut gt = hi - 1;
        let mut i = lo + 1;
        while i <= gt {
            let c = text[(index[i] + d) % n];
            match c.cmp(&pivot) {
                Ordering::Less => {
                    index.swap(lt, i);
                    lt += 1;
                    i += 1;
                }
                Ordering::Greater => {
                    index.swap(i, gt);
                    gt -= 1;
                }
                Ordering::Equal => i += 1,
            }
        }
        trace!(
            "Partitioned [{}, {}) at depth {}: {} less, {} equal, {} greater",
            lo,
            hi,
            d,
            lt - lo,
            gt + 1 - lt,
            hi - gt - 1
        );

        stack.push((gt + 1, hi, d));
        // Past a full period every member of the equal bucket is the same rotation.
        if d < n {
            stack.push((lt, gt + 1, d + 1));
        }
        stack.push((lo, lt, d));
    }
}

/// Insertion sort of a small subarray whose members already agree on their first `d` characters.
fn insertion_sort(index: &mut [usize], text: &[u8], d: usize) {
    for i in 1..index.len() {
        let mut j = i;
        while j > 0 && less(text, index[j], index[j - 1], d) {
            index.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Is the rotation at `i`, read from its d-th character, smaller than the one at `j`?
///
/// Both rotations are compared for a full period from offset `d`. When they never differ the
/// rotations are identical and the larger wrapped start position, `(i + d) % N`, sorts first.
fn less(text: &[u8], i: usize, j: usize, d: usize) -> bool {
    if i == j {
        return false;
    }
    let n = text.len();
    let a = (i + d) % n;
    let b = (j + d) % n;

    let lhs = text[a..].iter().chain(&text[..a]);
    let rhs = text[b..].iter().chain(&text[..b]);
    match lhs.cmp(rhs) {
        Ordering::Less => true,
        Ordering::Greater => false,
        Ordering::Equal => a > b,
    }
}
