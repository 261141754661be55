use super::*;

#[test]
fn empty_feed_produces_nothing() {
    let mut acc = BlockAccumulator::<8>::new();
    assert!(acc.feed(&[]).is_empty());
    assert!(acc.is_empty());
}

#[test]
fn exact_block_is_emitted_immediately() {
    let mut acc = BlockAccumulator::<8>::new();
    let blocks = acc.feed(&[1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(blocks, vec![[1, 2, 3, 4, 5, 6, 7, 8]]);
    assert!(acc.is_empty());
}

#[test]
fn split_chunks_reassemble_into_blocks() {
    let mut acc = BlockAccumulator::<4>::new();
    assert!(acc.feed(&[1]).is_empty());
    assert!(acc.feed(&[2, 3]).is_empty());
    assert!(!acc.is_empty());
    let blocks = acc.feed(&[4, 5]);
    assert_eq!(blocks, vec![[1, 2, 3, 4]]);
    assert!(!acc.is_empty());
}

#[test]
fn one_large_chunk_yields_multiple_blocks() {
    let mut acc = BlockAccumulator::<4>::new();
    let blocks = acc.feed(&[0, 1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(blocks, vec![[0, 1, 2, 3], [4, 5, 6, 7]]);
    assert!(!acc.is_empty());
}

#[test]
fn finalize_empty_is_none() {
    let mut acc = BlockAccumulator::<4>::new();
    assert_eq!(acc.finalize(), None);
}

#[test]
fn finalize_writes_marker_and_zero_fill() {
    let mut acc = BlockAccumulator::<8>::new();
    acc.feed(&[0xaa, 0xbb, 0xcc]);
    let block = acc.finalize().unwrap();
    assert_eq!(block, [0xaa, 0xbb, 0xcc, PAD_MARKER, 0, 0, 0, 0]);
    assert!(acc.is_empty());
    assert_eq!(acc.finalize(), None);
}

#[test]
fn strip_padding_recovers_original_length() {
    let mut acc = BlockAccumulator::<8>::new();
    acc.feed(&[0xaa, 0xbb, 0xcc]);
    let block = acc.finalize().unwrap();
    assert_eq!(strip_padding(&block), &[0xaa, 0xbb, 0xcc]);
}

#[test]
fn strip_padding_handles_marker_in_last_byte() {
    let mut acc = BlockAccumulator::<4>::new();
    acc.feed(&[1, 2, 3]);
    let block = acc.finalize().unwrap();
    assert_eq!(block, [1, 2, 3, PAD_MARKER]);
    assert_eq!(strip_padding(&block), &[1, 2, 3]);
}

#[test]
fn strip_padding_leaves_unpadded_blocks_alone() {
    let block = [1u8, 2, 3, 4];
    assert_eq!(strip_padding(&block), &block);
    // A trailing zero run with no marker is data, not padding.
    let zeros = [1u8, 2, 0, 0];
    assert_eq!(strip_padding(&zeros), &zeros);
}

#[test]
fn feed_is_chunking_invariant() {
    let data: Vec<u8> = (0u8..=99).collect();

    let mut whole = BlockAccumulator::<16>::new();
    let mut expected = whole.feed(&data);
    expected.extend(whole.finalize());

    let mut split = BlockAccumulator::<16>::new();
    let mut got = Vec::new();
    for piece in data.chunks(7) {
        got.extend(split.feed(piece));
    }
    got.extend(split.finalize());

    assert_eq!(got, expected);
}
