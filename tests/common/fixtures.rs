//! Reusable fixture content

/// Fails on sources containing `FAIL` or an unexpanded `define`, hangs on `HANG`.
pub const FAKE_COMPILER: &str = r#"src="$1"
echo "$src" >> invocations.log
if grep -q HANG "$src"; then exec sleep 30; fi
if grep -q -e FAIL -e define "$src"; then
  echo "$src:1: syntax error"
  echo "second line of diagnostics"
  exit 1
fi
exit 0
"#;

/// Expands sources containing `define` into `$QUESTC_PREPROCESSED_DIR`.
pub const FAKE_PREPROCESSOR: &str = r#"src="$1"
if grep -q define "$src"; then
  mkdir -p "$QUESTC_PREPROCESSED_DIR/$(dirname "$src")"
  sed 's/define/local/' "$src" > "$QUESTC_PREPROCESSED_DIR/$src"
  exit 0
fi
exit 1
"#;

pub const BASE_CONFIG: &str = r#"[compiler]
command = "sh"
args = ["fake_qc.sh"]
fallbacks = []
timeout_secs = 10

[preprocess]
command = ["sh", "fake_pre.sh"]
"#;

pub const GOOD_QUEST: &str = "quest good begin\n  state start begin end\nend\n";

pub const BROKEN_QUEST: &str = "quest broken begin\n  FAIL\nend\n";

pub const DEFINE_QUEST: &str = "define REWARD 100\nquest dragon begin end\n";

pub const HANGING_QUEST: &str = "quest slow begin HANG end\n";

pub const QUESTC_ENV_KEYS: &[&str] = &[
    "QUESTC_QUEST_ROOT",
    "QUESTC_COMPILER",
    "QUESTC_TIMEOUT",
    "QUESTC_PREPROCESS_STRATEGY",
    "QUESTC_JOBS",
];
