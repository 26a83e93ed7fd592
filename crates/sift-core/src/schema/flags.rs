flags! {
    /// Structural purpose of a field.
    pub struct Role: u16 {
        const PRIMARY_KEY = 0;
        const INCREMENT = 1;
        const REVISION = 2;
        const SEQUENCE = 3;
        const ARCHIVED = 4;
        const ISOLATION = 5;
        const CREATED_DATE = 6;
        const CREATED_USER = 7;
        const UPDATED_DATE = 8;
        const UPDATED_USER = 9;
        const SPLIT_VALUE = 10;
    }
}

flags! {
    /// How a field participates in cache keys.
    pub struct CacheRole: u8 {
        const CACHE_KEY = 0;
        const CACHE_KEY_PREFIX = 1;
        const IGNORE = 2;
    }
}

flags! {
    /// Storage column features.
    pub struct DbFeature: u8 {
        const NOT_FIXED_LENGTH = 0;
        const NOT_NULL = 1;
        const HAS_DEFAULT = 2;
    }
}

flags! {
    /// Statements a field is excluded from.
    pub struct Behavior: u8 {
        const NOT_QUERY = 0;
        const NOT_INSERT = 1;
        const NOT_UPDATE = 2;
    }
}
