//! Tests for key-value profile storage

#[cfg(test)]
mod tests {
    use inkposter::StyleError;
    use inkposter::analysis::analyze_with_rng;
    use inkposter::analysis::profile::StyleProfile;
    use inkposter::io::store::{
        DirectoryStore, MemoryStore, ProfileStore, load_profile, save_profile,
    };
    use inkposter::raster::PixelBuffer;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tempfile::tempdir;

    fn sample_profile() -> StyleProfile {
        let reference = PixelBuffer::filled(24, 24, [30, 90, 200, 255]).expect("valid buffer");
        let mut rng = StdRng::seed_from_u64(3);
        analyze_with_rng("Ocean", &[reference], &mut rng).expect("analysis succeeds")
    }

    // Tests memory store get and set semantics
    // Verified by returning an empty string for missing keys
    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("key").expect("reads"), None);
        store.set("key", "one".to_string()).expect("writes");
        store.set("key", "two".to_string()).expect("writes");
        assert_eq!(store.get("key").expect("reads"), Some("two".to_string()));
    }

    // Tests a saved profile loads back with the same contents
    // Verified by saving the suggested parameters only
    #[test]
    fn test_save_and_load_profile() {
        let profile = sample_profile();
        let mut store = MemoryStore::new();

        assert!(load_profile(&store, "active").expect("reads").is_none());
        save_profile(&mut store, "active", &profile).expect("saves");
        let loaded = load_profile(&store, "active")
            .expect("reads")
            .expect("profile present");

        assert_eq!(loaded.name, "Ocean");
        assert_eq!(loaded.palette, profile.palette);
        assert_eq!(loaded.suggested.motif_pack, profile.suggested.motif_pack);
    }

    // Tests a malformed stored profile is an error and leaves the caller's profile untouched
    // Verified by falling back to a default profile on parse failure
    #[test]
    fn test_malformed_profile_is_recoverable() {
        let current = sample_profile();
        let mut store = MemoryStore::new();
        store
            .set("active", "{\"name\": \"half\"}".to_string())
            .expect("writes");

        let result = load_profile(&store, "active");
        assert!(matches!(result, Err(StyleError::MalformedProfile { .. })));
        assert_eq!(current.name, "Ocean");
        assert!(current.validate().is_ok());
    }

    // Tests directory store writes one JSON file per key, creating the directory
    // Verified by writing every key to the same file
    #[test]
    fn test_directory_store() {
        let dir = tempdir().expect("temp dir");
        let root = dir.path().join("profiles");
        let mut store = DirectoryStore::new(&root);

        assert_eq!(store.get("first").expect("reads"), None);
        store.set("first", "1".to_string()).expect("writes");
        store.set("second", "2".to_string()).expect("writes");

        assert!(root.join("first.json").exists());
        assert!(root.join("second.json").exists());
        assert_eq!(store.get("first").expect("reads"), Some("1".to_string()));

        let profile = sample_profile();
        save_profile(&mut store, "active", &profile).expect("saves");
        let reopened = DirectoryStore::new(&root);
        let loaded = load_profile(&reopened, "active")
            .expect("reads")
            .expect("profile present");
        assert_eq!(loaded.palette, profile.palette);
    }

    // Tests the store trait can be used as a trait object
    // Verified by adding a Sized bound to save_profile
    #[test]
    fn test_trait_object_store() {
        let mut boxed: Box<dyn ProfileStore> = Box::new(MemoryStore::new());
        save_profile(boxed.as_mut(), "k", &sample_profile()).expect("saves");
        assert!(load_profile(boxed.as_ref(), "k").expect("reads").is_some());
    }
}
