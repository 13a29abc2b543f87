//! Keyword tables driving the textual heuristics.
//!
//! All keywords are lowercase; analyzers match them against lowercased
//! source text, which makes every lookup case-insensitive.

/// A named group of trigger strings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeywordFamily {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

/// A keyword group whose presence adds (or subtracts) a fixed amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedFamily {
    pub family: KeywordFamily,
    pub bonus: f64,
}

const fn family(name: &'static str, keywords: &'static [&'static str]) -> KeywordFamily {
    KeywordFamily { name, keywords }
}

const fn weighted(name: &'static str, keywords: &'static [&'static str], bonus: f64) -> WeightedFamily {
    WeightedFamily {
        family: family(name, keywords),
        bonus,
    }
}

// ---------------------------------------------------------------------------
// Architectural coherence
// ---------------------------------------------------------------------------

pub static ARCHITECTURAL_PATTERNS: &[KeywordFamily] = &[
    family(
        "mvc",
        &["model", "view", "controller", "models", "views", "controllers"],
    ),
    family("repository", &["repository", "repo", "dao", "data_access"]),
    family("factory", &["factory", "builder", "create"]),
    family("observer", &["observer", "listener", "subscriber", "event"]),
    family("strategy", &["strategy", "algorithm", "policy"]),
    family("adapter", &["adapter", "wrapper", "bridge"]),
];

/// Substrings that mark an import line as standard library.
pub static STDLIB_MODULES: &[&str] = &["os", "sys", "json", "time", "datetime", "collections", "re"];

// ---------------------------------------------------------------------------
// Dependency traversal
// ---------------------------------------------------------------------------

/// Substrings that make an import line look unreasonable.
pub static SUSPICIOUS_IMPORT_MARKERS: &[&str] = &["__", "sys.exit", "eval", "exec"];

/// Calls that are always considered resolvable.
pub static BUILTIN_FUNCTIONS: &[&str] = &[
    "print", "len", "str", "int", "float", "list", "dict", "set", "tuple", "range", "enumerate",
    "zip", "map", "filter", "sum", "max", "min", "open", "abs", "round", "sorted", "reversed",
];

// ---------------------------------------------------------------------------
// Multi-session memory
// ---------------------------------------------------------------------------

/// Action roots shared by identifiers that name the same concept.
pub static SEMANTIC_ROOTS: &[&str] = &[
    "get", "set", "create", "update", "delete", "handle", "process",
];

pub static APPROACH_INDICATORS: &[KeywordFamily] = &[
    family(
        "error_handling",
        &["try", "catch", "error", "exception", "if err"],
    ),
    family("data_structures", &["map", "slice", "array", "list", "dict"]),
    family(
        "patterns",
        &["interface", "struct", "class", "factory", "builder"],
    ),
    family("style", &["func", "function", "method", "procedure"]),
];

pub static STATE_INDICATORS: &[WeightedFamily] = &[
    weighted("immutability", &["const", "readonly", "immutable", "copy"], 0.3),
    weighted("shared_state", &["global", "static", "shared", "singleton"], -0.1),
    weighted("state_isolation", &["private", "encapsulated", "local"], 0.3),
    weighted("state_validation", &["validate", "check", "verify", "assert"], 0.1),
];

/// Raw substrings counted (with overlaps between tokens) as mutations.
pub static MUTATION_TOKENS: &[&str] = &["=", "++", "--", "+=", "-="];

// ---------------------------------------------------------------------------
// Cross-file reasoning
// ---------------------------------------------------------------------------

pub static INTERFACE_PATTERNS: &[KeywordFamily] = &[
    family("interface_definition", &["interface", "protocol", "abstract"]),
    family("dependency_injection", &["inject", "provide", "wire", "bind"]),
    family("abstraction", &["implement", "extend", "inherit", "override"]),
    family("contracts", &["requires", "ensures", "contract", "guarantee"]),
];

/// Case-sensitive suffixes of well-named interfaces.
pub static INTERFACE_NAME_SUFFIXES: &[&str] = &["er", "able", "Interface"];

pub static SHARED_STATE_MARKERS: &[&str] = &["global", "static", "shared"];

pub static COORDINATION_PATTERNS: &[KeywordFamily] = &[
    family(
        "synchronization",
        &["mutex", "lock", "sync", "atomic", "synchronized"],
    ),
    family(
        "messaging",
        &["channel", "queue", "event", "message", "signal"],
    ),
    family("coordination", &["wait", "notify", "coordinate", "barrier"]),
    family("isolation", &["goroutine", "thread", "process", "worker"]),
];

pub static EDIT_INTENT_WORDS: &[&str] = &["update", "modify", "change", "edit", "alter", "refactor"];

pub static MODIFICATION_PATTERNS: &[KeywordFamily] = &[
    family("transaction", &["transaction", "commit", "rollback", "begin"]),
    family("validation", &["validate", "check", "verify", "ensure"]),
    // "acid" is lowercase like every other keyword, so it matches `ACID` in lowercased code.
    family("consistency", &["consistent", "atomic", "acid", "integrity"]),
    family(
        "error_recovery",
        &["recover", "retry", "fallback", "compensate"],
    ),
];

pub static CHANGE_TRACKING_MARKERS: &[&str] = &["version", "changelog"];

pub static DATA_FLOW_PATTERNS: &[KeywordFamily] = &[
    family("input_validation", &["validate", "sanitize", "check", "verify"]),
    family("data_transformation", &["transform", "convert", "map", "filter"]),
    family("output_formatting", &["format", "serialize", "marshal", "encode"]),
    family("error_propagation", &["error", "exception", "fail", "panic"]),
];

pub static FLOW_INPUT_MARKERS: &[&str] = &["input", "request", "param"];
pub static FLOW_PROCESS_MARKERS: &[&str] = &["process", "handle", "execute"];
pub static FLOW_OUTPUT_MARKERS: &[&str] = &["output", "response", "return"];

// ---------------------------------------------------------------------------
// Incremental development
// ---------------------------------------------------------------------------

pub static COMPATIBILITY_TRIGGER_WORDS: &[&str] =
    &["update", "upgrade", "migrate", "compatibility", "legacy"];

pub static COMPATIBILITY_INDICATORS: &[WeightedFamily] = &[
    weighted("versioning", &["version", "v1", "v2", "deprecated", "legacy"], 0.3),
    weighted("adaptation", &["adapter", "wrapper", "bridge", "facade"], 0.3),
    weighted("migration", &["migrate", "upgrade", "transition", "convert"], 0.3),
    weighted("deprecation", &["deprecated", "obsolete", "remove", "replace"], 0.1),
];

pub static REUSE_PATTERNS: &[KeywordFamily] = &[
    family("functions", &["func", "function", "def", "method"]),
    family("modules", &["import", "include", "require", "use"]),
    family("inheritance", &["extends", "inherit", "implement", "interface"]),
    family("composition", &["compose", "mixin", "trait", "delegate"]),
];

pub static EXTENSIBILITY_PATTERNS: &[KeywordFamily] = &[
    family("interfaces", &["interface", "protocol", "contract"]),
    family("plugins", &["plugin", "extension", "addon", "module"]),
    family("hooks", &["hook", "callback", "listener", "event"]),
    family("factories", &["factory", "builder", "creator", "generator"]),
];

pub static CONFIGURATION_MARKERS: &[&str] = &["config", "setting", "option", "parameter"];
pub static MODULARITY_MARKERS: &[&str] = &["module", "component", "service", "package"];

pub static DISRUPTION_TRIGGER_WORDS: &[&str] = &["add", "integrate", "extend", "enhance", "modify"];

pub static BREAKING_MARKERS: &[&str] = &["breaking", "remove", "delete", "replace"];
pub static NON_BREAKING_MARKERS: &[&str] = &["add", "extend", "enhance", "backward", "compatible"];
pub static ENCAPSULATION_MARKERS: &[&str] = &["separate", "isolate", "encapsulate", "module"];

// ---------------------------------------------------------------------------
// Information coverage
// ---------------------------------------------------------------------------

pub static REQUIREMENT_ACTION_VERBS: &[&str] =
    &["implement", "create", "add", "update", "fix", "analyze"];

pub static ARCHITECTURE_VOCABULARY: &[&str] = &[
    "middleware", "handler", "controller", "service", "repository", "model", "mvc", "rest", "api",
    "router", "endpoint", "interface", "struct", "package", "module", "component", "layer", "tier",
];

pub static STRUCTURAL_KEYWORDS: &[&str] =
    &["function", "method", "class", "struct", "interface", "package"];

pub static DEPENDENCY_KEYWORDS: &[&str] =
    &["import", "dependency", "require", "use", "call", "invoke"];

pub static BUSINESS_KEYWORDS: &[&str] = &[
    "user", "customer", "order", "product", "payment", "account", "profile", "create", "update",
    "delete", "get", "list", "search", "filter", "validate", "process", "calculate", "generate",
    "send", "receive",
];

pub static DATA_FLOW_KEYWORDS: &[&str] = &[
    "input", "output", "request", "response", "data", "parameter", "return", "result", "json",
    "xml", "struct", "map", "array", "slice",
];

pub static ERROR_KEYWORDS: &[&str] = &["error", "exception", "fail", "invalid", "check", "validate"];

pub static ACTION_KEYWORDS: &[&str] = &[
    "implement", "create", "build", "add", "update", "modify", "delete", "handle", "process",
    "manage", "execute", "run", "start", "stop",
];

pub static TECH_KEYWORDS: &[&str] = &[
    "http", "json", "api", "rest", "endpoint", "server", "client", "database", "sql", "query",
    "connection", "session", "cookie",
];
