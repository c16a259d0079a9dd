//! Template catalog.
//!
//! Maps `(ArtifactKind, LanguageVariant)` to file content. The build file is
//! assembled from three parts:
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ name declaration + paths     │  PROJECT = {{PROJECT_NAME}} (always line 1)
//! ├──────────────────────────────┤
//! │ language preamble            │  CC, EXT, SRC, FLAGS, DEBUG_FLAGS
//! ├──────────────────────────────┤
//! │ mode sections                │  mode ?= debug, ifeq ($(mode),release)
//! ├──────────────────────────────┤
//! │ shared skeleton              │  compile rule, -include, phony targets
//! └──────────────────────────────┘
//! ```
//!
//! Only the preamble differs between C and C++.

use crate::domain::entities::template::RenderContext;
use crate::domain::value_objects::{ArtifactKind, BuildMode, LanguageVariant};

/// Prefix of the build file's first line. Rename relies on it.
pub const NAME_DECLARATION_PREFIX: &str = "PROJECT = ";

const HEADER: &str = "PROJECT = {{PROJECT_NAME}}
SRC_DIR = src
BUILD_DIR = target
DEBUG = $(BUILD_DIR)/debug/$(PROJECT)
RELEASE = $(BUILD_DIR)/release/$(PROJECT)

";

const C_PREAMBLE: &str = "CC = gcc
EXT = c
SRC = $(wildcard $(SRC_DIR)/*.$(EXT))
FLAGS = -Wall -Werror -Wextra -Wpedantic -Wformat=2 -Wformat-overflow=2 -Wformat-truncation=2 -Wformat-security -Wnull-dereference -Wstack-protector -Wtrampolines -Walloca -Wvla -Warray-bounds=2 -Wimplicit-fallthrough=3 -Wtraditional-conversion -Wshift-overflow=2 -Wcast-qual -Wstringop-overflow=4 -Wconversion -Warith-conversion -Wlogical-op -Wduplicated-cond -Wduplicated-branches -Wformat-signedness -Wshadow -Wstrict-overflow=4 -Wundef -Wstrict-prototypes -Wswitch-default -Wswitch-enum -Wstack-usage=1000000 -Wcast-align=strict -fstack-protector-strong -fstack-clash-protection -fPIE -pipe
# Not production ready as of 2021-09-01 (google/sanitizers#1324): -fsanitize=pointer-compare -fsanitize=pointer-subtract
DEBUG_FLAGS = -g -fsanitize=address -fsanitize=leak -fno-omit-frame-pointer -fsanitize=undefined -fsanitize=bounds-strict -fsanitize=float-divide-by-zero -fsanitize=float-cast-overflow -fanalyzer
LDFLAGS = -pie -Wl,-z,relro -Wl,-z,now -Wl,-z,noexecstack -Wl,-z,separate-code

";

const CPP_PREAMBLE: &str = "CC = g++
EXT = cpp
SRC = $(wildcard $(SRC_DIR)/*.$(EXT))
FLAGS = -std=c++20 -Wall -Werror -Wextra -Wpedantic
DEBUG_FLAGS = -g
LDFLAGS =

";

const RELEASE_FLAGS: &str = "RELEASE_FLAGS = -O2 -D_FORTIFY_SOURCE=2\n";

const SKELETON: &str = "OBJ = $(patsubst $(SRC_DIR)/%.$(EXT),$(OBJ_DIR)/%.o,$(SRC))
DEP = $(OBJ:.o=.d)

all: $(OUTPUT)

$(OUTPUT): $(OBJ)
\t@mkdir -p $(@D)
\t$(CC) $(OBJ) -o $@ $(FLAGS) $(MODE_FLAGS) $(LDFLAGS)

$(OBJ_DIR)/%.o: $(SRC_DIR)/%.$(EXT)
\t@mkdir -p $(@D)
\t$(CC) $(FLAGS) $(MODE_FLAGS) -MMD -MP -c $< -o $@

-include $(DEP)

.PHONY: all clean install uninstall run

# write \"make run a=...\" for command line arguments
run: $(OUTPUT)
\t./$(OUTPUT) $(a)

clean:
\trm -rf $(BUILD_DIR)

# installs from release folder only
install:
\t$(MAKE) mode=release
\tmkdir -p ~/.local/bin
\tln -sf $(CURDIR)/$(RELEASE) ~/.local/bin/$(PROJECT)

uninstall:
\trm -f ~/.local/bin/$(PROJECT)
";

const IGNORE_FILE: &str = "/target\n";

const DELEGATED_BUILD_FILE: &str = "all:
\t$(MAKE) -C .. $@
%:
\t$(MAKE) -C .. $@
";

const C_SOURCE_STUB: &str = "#include <stdio.h>

int
main(void) {
    printf(\"Hello world!\\n\");
}
";

const CPP_SOURCE_STUB: &str = "#include <iostream>

int
main() {
    std::cout << \"Hello world!\\n\";
}
";

/// Enum-keyed template lookup. Pure: no I/O, no failure.
pub struct TemplateCatalog;

impl TemplateCatalog {
    /// Render one artifact for a language variant.
    pub fn render(kind: ArtifactKind, variant: LanguageVariant, ctx: &RenderContext) -> String {
        match kind {
            ArtifactKind::BuildFile => Self::build_file(variant, ctx),
            ArtifactKind::IgnoreFile => IGNORE_FILE.to_string(),
            ArtifactKind::DelegatedBuildFile => DELEGATED_BUILD_FILE.to_string(),
            ArtifactKind::SourceStub => match variant {
                LanguageVariant::C => C_SOURCE_STUB.to_string(),
                LanguageVariant::Cpp => CPP_SOURCE_STUB.to_string(),
            },
        }
    }

    /// Compiler selection, source glob and flag sets for a variant.
    pub fn preamble(variant: LanguageVariant) -> &'static str {
        match variant {
            LanguageVariant::C => C_PREAMBLE,
            LanguageVariant::Cpp => CPP_PREAMBLE,
        }
    }

    fn build_file(variant: LanguageVariant, ctx: &RenderContext) -> String {
        let mut out = ctx.render(HEADER);
        out.push_str(Self::preamble(variant));
        out.push_str(&Self::mode_sections());
        out.push_str(SKELETON);
        out
    }

    /// `mode ?= debug` followed by one assignment block per mode.
    ///
    /// The default mode's values are plain assignments; every other mode
    /// overrides them inside an `ifeq` block.
    fn mode_sections() -> String {
        let default = BuildMode::default();
        let mut out = String::from(RELEASE_FLAGS);
        out.push('\n');
        out.push_str(&format!("mode ?= {default}\n"));
        out.push_str(&mode_assignments(default, ""));

        for mode in BuildMode::ALL.into_iter().filter(|m| *m != default) {
            out.push_str(&format!("\nifeq ($(mode),{mode})\n"));
            out.push_str(&mode_assignments(mode, "    "));
            out.push_str("endif\n");
        }

        out.push('\n');
        out
    }
}

fn mode_assignments(mode: BuildMode, indent: &str) -> String {
    let upper = mode.as_str().to_ascii_uppercase();
    format!(
        "{indent}OBJ_DIR = $(BUILD_DIR)/{mode}/obj\n\
         {indent}OUTPUT = $({upper})\n\
         {indent}MODE_FLAGS = $({upper}_FLAGS)\n"
    )
}
