use super::*;

#[tokio::test]
async fn stub_is_always_ready() {
    let stub = StubEmbeddingProvider::default();
    assert!(stub.is_initialized());
    stub.initialize().await.unwrap();
    assert!(stub.is_initialized());
    assert_eq!(stub.dimensions(), STUB_DIMENSIONS);
}

#[tokio::test]
async fn stub_vectors_have_native_length_and_range() {
    let stub = StubEmbeddingProvider::default();
    let v = stub.embed("calm").await.unwrap();
    assert_eq!(v.len(), 512);
    assert!(v.iter().all(|x| (-0.5..0.5).contains(x)));
}

#[tokio::test]
async fn stub_output_is_not_reproducible() {
    let stub = StubEmbeddingProvider::new(64);
    let a = stub.embed("same text").await.unwrap();
    let b = stub.embed("same text").await.unwrap();
    assert_ne!(a, b);
}
