//! Build descriptor reading.
//!
//! A descriptor is a Maven `pom.xml` listing the grammar files of one
//! grammar project along with test metadata. It is streamed element by
//! element; only a handful of element names are recognized, matched by local
//! name at any depth, and everything else is skipped.
//!
//! An unreadable file, a recognized element whose body cannot be decoded, or
//! a bad example pattern abort the parse. Malformed markup elsewhere stops
//! reading and keeps what was gathered so far. That, and problems with
//! individual grammar references, are collected as [`Warning`]s next to the
//! partially filled [`Project`].
//!
//! Paths built from the descriptor are cleaned lexically, so `./json/pom.xml`
//! and `json/pom.xml` describe the same project.

use std::{
    fmt::{self, Display, Formatter},
    fs::File,
    io::{BufRead, BufReader},
    path::{Component, Path, PathBuf, is_separator},
};

use quick_xml::{Reader, events::Event};

use crate::{
    config::ReaderOptions,
    error::DescriptorError,
    grammar::{GrammarType, parse_grammar_header},
    project::Project,
};

/// Artifact id marking a descriptor that builds with the ANTLR Maven plugin.
pub const ANTLR4_MAVEN_PLUGIN: &str = "antlr4-maven-plugin";

/// A non-fatal problem with one grammar reference.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Warning {
    /// Neither the referenced file nor any target variant exists.
    MissingGrammar { path: PathBuf, descriptor: PathBuf },

    /// The file exists but its header could not be classified.
    UnparsableGrammar { path: PathBuf, message: String },

    /// Markup outside any recognized element is malformed; elements after
    /// it were not read.
    MalformedDescriptor { descriptor: PathBuf, message: String },

    /// The file declares a grammar type the project already has.
    DuplicateGrammarType {
        path: PathBuf,
        kind: GrammarType,
        existing: String,
    },
}

impl Display for Warning {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingGrammar { path, descriptor } => write!(
                f,
                "missing grammar {} referenced in {}",
                path.display(),
                descriptor.display()
            ),
            Self::UnparsableGrammar { path, message } => {
                write!(f, "failed to parse grammar {}: {message}", path.display())
            }
            Self::MalformedDescriptor {
                descriptor,
                message,
            } => write!(
                f,
                "stopped reading descriptor {}: {message}",
                descriptor.display()
            ),
            Self::DuplicateGrammarType {
                path,
                kind,
                existing,
            } => write!(
                f,
                "ignoring grammar {}: project already has {kind} grammar {existing}",
                path.display()
            ),
        }
    }
}

/// A project together with the warnings raised while reading it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ParsedDescriptor {
    pub project: Project,
    pub warnings: Vec<Warning>,
}

/// Descriptor elements that carry project data.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Field {
    ArtifactId,
    Include,
    GrammarName,
    EntryPoint,
    ExampleFiles,
    CaseInsensitiveType,
}

impl Field {
    fn from_local_name(name: &[u8]) -> Option<Self> {
        match name {
            b"artifactId" => Some(Self::ArtifactId),
            b"grammars" | b"include" => Some(Self::Include),
            b"grammarName" => Some(Self::GrammarName),
            b"entryPoint" => Some(Self::EntryPoint),
            b"exampleFiles" => Some(Self::ExampleFiles),
            b"caseInsensitiveType" => Some(Self::CaseInsensitiveType),
            _ => None,
        }
    }
}

/// Reads build descriptors into [`Project`]s.
#[derive(Clone, Debug, Default)]
pub struct DescriptorReader {
    options: ReaderOptions,
}

impl DescriptorReader {
    /// Create a reader with the given options.
    #[must_use]
    pub const fn new(options: ReaderOptions) -> Self {
        Self { options }
    }

    /// Parse the descriptor at `path`.
    ///
    /// Grammar references are resolved relative to the descriptor's
    /// directory.
    ///
    /// # Errors
    ///
    /// - [`DescriptorError::Io`] if the descriptor cannot be opened or read
    /// - [`DescriptorError::Decode`] if a recognized element's body is
    ///   malformed or unterminated
    /// - [`DescriptorError::Glob`] if the example pattern is malformed
    pub fn read(&self, path: &Path) -> Result<ParsedDescriptor, DescriptorError> {
        let file = File::open(path).map_err(|source| DescriptorError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        self.read_from(BufReader::new(file), path)
    }

    /// Parse descriptor markup from `input` as if it were the file at `path`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::read`].
    pub fn read_from<R: BufRead>(
        &self,
        input: R,
        path: &Path,
    ) -> Result<ParsedDescriptor, DescriptorError> {
        let mut state = ParseState::new(&self.options, path);
        let mut reader = Reader::from_reader(input);
        let mut buf = Vec::new();
        let mut text_buf = Vec::new();

        loop {
            let event = match reader.read_event_into(&mut buf) {
                Ok(event) => event,
                Err(e) => {
                    state.stop(markup_message(reader.error_position(), &e));
                    break;
                }
            };

            let (field, empty) = match event {
                Event::Start(ref e) => (Field::from_local_name(e.local_name().as_ref()), false),
                Event::Empty(ref e) => (Field::from_local_name(e.local_name().as_ref()), true),
                Event::Eof => break,
                _ => (None, false),
            };
            buf.clear();

            let Some(field) = field else {
                continue;
            };

            let text = if empty {
                String::new()
            } else {
                read_element_text(&mut reader, &mut text_buf, path)?
            };

            state.apply(field, text)?;
        }

        Ok(state.finish())
    }
}

/// Parse the descriptor at `path` with default [`ReaderOptions`].
///
/// # Errors
///
/// See [`DescriptorReader::read`].
pub fn parse_descriptor(path: &Path) -> Result<ParsedDescriptor, DescriptorError> {
    DescriptorReader::default().read(path)
}

/// Project under construction plus the context needed to resolve references.
struct ParseState<'a> {
    options: &'a ReaderOptions,
    path: &'a Path,
    dir: PathBuf,
    project: Project,
    warnings: Vec<Warning>,
}

impl<'a> ParseState<'a> {
    fn new(options: &'a ReaderOptions, path: &'a Path) -> Self {
        Self {
            options,
            path,
            dir: clean_path(path.parent().unwrap_or_else(|| Path::new(""))),
            project: Project::new(path),
            warnings: Vec::new(),
        }
    }

    fn apply(&mut self, field: Field, text: String) -> Result<(), DescriptorError> {
        match field {
            Field::ArtifactId => {
                if text.trim() == ANTLR4_MAVEN_PLUGIN {
                    self.project.found_antlr4_maven_plugin = true;
                }
            }
            Field::Include => self.include(text.trim()),
            Field::GrammarName => self.project.long_name = Some(text),
            Field::EntryPoint => self.project.entry_point = Some(text),
            Field::ExampleFiles => self.examples(text.trim())?,
            Field::CaseInsensitiveType => self.project.case_insensitive_type = Some(text),
        }

        Ok(())
    }

    fn include(&mut self, reference: &str) {
        let referenced = clean_path(&self.dir.join(reference));

        let Some(file) = self
            .options
            .candidates(&referenced)
            .into_iter()
            .find(|candidate| candidate.exists())
        else {
            self.warnings.push(Warning::MissingGrammar {
                path: referenced,
                descriptor: self.path.to_path_buf(),
            });
            return;
        };

        if !self.project.add_include(file.clone()) {
            return;
        }

        match parse_grammar_header(&file) {
            Ok(grammar) => {
                if let Err(rejected) = self.project.add_grammar(grammar) {
                    let existing = self
                        .project
                        .grammar_of_type(rejected.kind)
                        .map(|g| g.name.clone())
                        .unwrap_or_default();

                    self.warnings.push(Warning::DuplicateGrammarType {
                        path: rejected.filename,
                        kind: rejected.kind,
                        existing,
                    });
                }
            }
            Err(e) => self.warnings.push(Warning::UnparsableGrammar {
                path: file,
                message: e.to_string(),
            }),
        }
    }

    fn examples(&mut self, directory: &str) -> Result<(), DescriptorError> {
        let pattern = clean_path(&self.dir.join(directory)).join("*");
        let pattern = pattern.to_string_lossy();

        let paths = glob::glob(&pattern).map_err(|source| DescriptorError::Glob {
            pattern: pattern.to_string(),
            source,
        })?;

        // Unreadable entries are skipped, not reported.
        self.project.examples = paths.filter_map(Result::ok).collect();
        self.project.example_root = Some(example_root(&self.dir));

        Ok(())
    }

    fn stop(&mut self, message: String) {
        self.warnings.push(Warning::MalformedDescriptor {
            descriptor: self.path.to_path_buf(),
            message,
        });
    }

    fn finish(self) -> ParsedDescriptor {
        ParsedDescriptor {
            project: self.project,
            warnings: self.warnings,
        }
    }
}

/// Lexically normalize `path`: drop `.` components and fold `name/..` pairs.
///
/// Leading `..` of a relative path are kept; `..` directly under the root is
/// dropped. The filesystem is not consulted.
fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.components().next_back() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => cleaned.push(".."),
            },
            other => cleaned.push(other),
        }
    }

    cleaned
}

/// Relative path from `dir` back to the repository root: one `../` per
/// separator in `dir`.
fn example_root(dir: &Path) -> String {
    let depth = dir
        .to_string_lossy()
        .chars()
        .filter(|c| is_separator(*c))
        .count();

    "../".repeat(depth)
}

/// Collect the text directly inside the element just opened, consuming
/// events up to and including its end tag.
fn read_element_text<R: BufRead>(
    reader: &mut Reader<R>,
    buf: &mut Vec<u8>,
    path: &Path,
) -> Result<String, DescriptorError> {
    let mut text = String::new();
    let mut depth = 0usize;

    loop {
        buf.clear();
        let event = reader
            .read_event_into(buf)
            .map_err(|e| markup_error(path, reader.error_position(), &e))?;

        match event {
            Event::Text(e) if depth == 0 => {
                let unescaped = e
                    .unescape()
                    .map_err(|e| DescriptorError::decode(path, format!("invalid text: {e}")))?;
                text.push_str(&unescaped);
            }
            Event::CData(e) if depth == 0 => {
                let raw = std::str::from_utf8(&e)
                    .map_err(|e| DescriptorError::decode(path, format!("invalid CDATA: {e}")))?;
                text.push_str(raw);
            }
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                if depth == 0 {
                    return Ok(text);
                }
                depth -= 1;
            }
            Event::Eof => {
                return Err(DescriptorError::decode(
                    path,
                    "unexpected end of file inside element",
                ));
            }
            _ => {}
        }
    }
}

fn markup_message(position: u64, error: &quick_xml::Error) -> String {
    format!("XML parse error at position {position}: {error}")
}

fn markup_error(path: &Path, position: u64, error: &quick_xml::Error) -> DescriptorError {
    DescriptorError::decode(path, markup_message(position, error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, io::Cursor};
    use tempfile::TempDir;

    fn create_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn pom(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
{body}
</project>
"#
        )
    }

    fn read_str(xml: &str, path: &Path) -> Result<ParsedDescriptor, DescriptorError> {
        DescriptorReader::default().read_from(Cursor::new(xml.as_bytes()), path)
    }

    #[test]
    fn test_field_from_local_name() {
        assert_eq!(Field::from_local_name(b"artifactId"), Some(Field::ArtifactId));
        assert_eq!(Field::from_local_name(b"grammars"), Some(Field::Include));
        assert_eq!(Field::from_local_name(b"include"), Some(Field::Include));
        assert_eq!(Field::from_local_name(b"grammarName"), Some(Field::GrammarName));
        assert_eq!(Field::from_local_name(b"entryPoint"), Some(Field::EntryPoint));
        assert_eq!(Field::from_local_name(b"exampleFiles"), Some(Field::ExampleFiles));
        assert_eq!(
            Field::from_local_name(b"caseInsensitiveType"),
            Some(Field::CaseInsensitiveType)
        );
        assert_eq!(Field::from_local_name(b"groupId"), None);
    }

    #[test]
    fn test_example_root_counts_separators() {
        assert_eq!(example_root(Path::new("")), "");
        assert_eq!(example_root(Path::new("json")), "");
        assert_eq!(example_root(Path::new("grammars/json")), "../");
        assert_eq!(example_root(Path::new("a/b/c")), "../../");
    }

    #[test]
    fn test_clean_path() {
        assert_eq!(clean_path(Path::new("./sub")), PathBuf::from("sub"));
        assert_eq!(clean_path(Path::new("a/./b/../c.g4")), PathBuf::from("a/c.g4"));
        assert_eq!(clean_path(Path::new("../a/../../b")), PathBuf::from("../../b"));
        assert_eq!(clean_path(Path::new("/../a")), PathBuf::from("/a"));
        assert_eq!(clean_path(Path::new(".")), PathBuf::new());
        assert_eq!(clean_path(Path::new("")), PathBuf::new());
    }

    #[test]
    fn test_example_root_ignores_current_dir_prefix() {
        let xml = pom("<exampleFiles>examples</exampleFiles>");

        let plain = read_str(&xml, Path::new("sub/pom.xml")).unwrap();
        let dotted = read_str(&xml, Path::new("./sub/pom.xml")).unwrap();
        let nested = read_str(&xml, Path::new("./a/../sql/mysql/pom.xml")).unwrap();

        assert_eq!(plain.project.example_root.as_deref(), Some(""));
        assert_eq!(dotted.project.example_root.as_deref(), Some(""));
        assert_eq!(nested.project.example_root.as_deref(), Some("../"));
    }

    #[test]
    fn test_empty_descriptor() {
        let parsed = read_str(&pom(""), Path::new("pom.xml")).unwrap();

        assert!(parsed.project.grammars.is_empty());
        assert!(parsed.project.includes.is_empty());
        assert!(!parsed.project.found_antlr4_maven_plugin);
        assert!(parsed.warnings.is_empty());
        assert_eq!(parsed.project.file_name, PathBuf::from("pom.xml"));
    }

    #[test]
    fn test_metadata_fields() {
        let xml = pom(r"
  <artifactId>json</artifactId>
  <build><plugins>
    <plugin>
      <groupId>org.antlr</groupId>
      <artifactId>antlr4-maven-plugin</artifactId>
    </plugin>
    <plugin>
      <groupId>com.khubla.antlr</groupId>
      <artifactId>antlr4test-maven-plugin</artifactId>
      <configuration>
        <grammarName>JSON</grammarName>
        <entryPoint>json</entryPoint>
        <caseInsensitiveType>UPPER</caseInsensitiveType>
      </configuration>
    </plugin>
  </plugins></build>");

        let parsed = read_str(&xml, Path::new("pom.xml")).unwrap();
        let project = parsed.project;

        assert!(project.found_antlr4_maven_plugin);
        assert_eq!(project.long_name.as_deref(), Some("JSON"));
        assert_eq!(project.entry_point.as_deref(), Some("json"));
        assert_eq!(project.case_insensitive_type.as_deref(), Some("UPPER"));
        assert!(project.example_root.is_none());
    }

    #[test]
    fn test_prefixed_element_names_match_by_local_name() {
        let xml = r#"<m:project xmlns:m="http://maven.apache.org/POM/4.0.0">
  <m:grammarName>Prefixed</m:grammarName>
</m:project>"#;

        let parsed = read_str(xml, Path::new("pom.xml")).unwrap();
        assert_eq!(parsed.project.long_name.as_deref(), Some("Prefixed"));
    }

    #[test]
    fn test_metadata_kept_verbatim_with_entities() {
        let xml = pom("<grammarName> A &amp; B </grammarName>");
        let parsed = read_str(&xml, Path::new("pom.xml")).unwrap();

        assert_eq!(parsed.project.long_name.as_deref(), Some(" A & B "));
    }

    #[test]
    fn test_cdata_body() {
        let xml = pom("<entryPoint><![CDATA[compilationUnit]]></entryPoint>");
        let parsed = read_str(&xml, Path::new("pom.xml")).unwrap();

        assert_eq!(parsed.project.entry_point.as_deref(), Some("compilationUnit"));
    }

    #[test]
    fn test_empty_element() {
        let xml = pom("<entryPoint/>");
        let parsed = read_str(&xml, Path::new("pom.xml")).unwrap();

        assert_eq!(parsed.project.entry_point.as_deref(), Some(""));
    }

    #[test]
    fn test_malformed_markup_is_decode_error() {
        let xml = pom("<grammarName>Broken</entryPoint>");
        let err = read_str(&xml, Path::new("pom.xml")).unwrap_err();

        assert!(matches!(err, DescriptorError::Decode { .. }));
    }

    #[test]
    fn test_malformed_unrecognized_markup_keeps_partial_project() {
        let xml = pom(
            "<grammarName>Kept</grammarName>
  <groupId>org.antlr</artifactId>
  <entryPoint>lost</entryPoint>",
        );
        let parsed = read_str(&xml, Path::new("pom.xml")).unwrap();

        assert_eq!(parsed.project.long_name.as_deref(), Some("Kept"));
        assert!(parsed.project.entry_point.is_none());
        assert_eq!(parsed.warnings.len(), 1);
        assert!(matches!(
            &parsed.warnings[0],
            Warning::MalformedDescriptor { descriptor, .. } if descriptor == Path::new("pom.xml")
        ));
    }

    #[test]
    fn test_truncated_element_is_decode_error() {
        let err = read_str("<project><grammarName>Broken", Path::new("pom.xml")).unwrap_err();
        assert!(matches!(err, DescriptorError::Decode { .. }));
    }

    #[test]
    fn test_bad_entity_is_decode_error() {
        let xml = pom("<grammarName>&bogus;</grammarName>");
        let err = read_str(&xml, Path::new("pom.xml")).unwrap_err();

        assert!(matches!(err, DescriptorError::Decode { .. }));
    }

    #[test]
    fn test_missing_descriptor_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = parse_descriptor(&temp.path().join("pom.xml")).unwrap_err();

        assert!(matches!(err, DescriptorError::Io { .. }));
    }

    #[test]
    fn test_include_resolved_relative_to_descriptor() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("json");
        create_file(&dir.join("JSON.g4"), "grammar JSON;\n");
        create_file(
            &dir.join("pom.xml"),
            &pom("<includes><include>JSON.g4</include></includes>"),
        );

        let parsed = parse_descriptor(&dir.join("pom.xml")).unwrap();

        assert_eq!(parsed.project.includes, vec![dir.join("JSON.g4")]);
        assert_eq!(parsed.project.grammars.len(), 1);
        assert_eq!(parsed.project.grammars[0].name, "JSON");
        assert_eq!(parsed.project.grammars[0].kind, GrammarType::Combined);
        assert!(parsed.warnings.is_empty());
    }

    #[test]
    fn test_grammars_element_and_whitespace_trimmed() {
        let temp = TempDir::new().unwrap();
        create_file(&temp.path().join("Calc.g4"), "grammar Calc;\n");
        create_file(
            &temp.path().join("pom.xml"),
            &pom("<grammars>\n    Calc.g4\n  </grammars>"),
        );

        let parsed = parse_descriptor(&temp.path().join("pom.xml")).unwrap();
        assert_eq!(parsed.project.includes, vec![temp.path().join("Calc.g4")]);
    }

    #[test]
    fn test_target_variant_preferred() {
        let temp = TempDir::new().unwrap();
        create_file(&temp.path().join("Foo.g4"), "grammar Foo;\n");
        create_file(&temp.path().join("Foo.GoTarget.g4"), "grammar FooGo;\n");
        create_file(
            &temp.path().join("pom.xml"),
            &pom("<include>Foo.g4</include>"),
        );

        let parsed = parse_descriptor(&temp.path().join("pom.xml")).unwrap();

        assert_eq!(
            parsed.project.includes,
            vec![temp.path().join("Foo.GoTarget.g4")]
        );
        assert_eq!(parsed.project.grammars[0].name, "FooGo");
    }

    #[test]
    fn test_target_variant_without_literal_file() {
        let temp = TempDir::new().unwrap();
        create_file(&temp.path().join("Foo.GoTarget.g4"), "grammar Foo;\n");
        create_file(
            &temp.path().join("pom.xml"),
            &pom("<include>Foo.g4</include>"),
        );

        let parsed = parse_descriptor(&temp.path().join("pom.xml")).unwrap();

        assert_eq!(parsed.project.grammars.len(), 1);
        assert!(parsed.warnings.is_empty());
    }

    #[test]
    fn test_custom_target_variants() {
        let temp = TempDir::new().unwrap();
        create_file(&temp.path().join("Foo.g4"), "grammar Foo;\n");
        create_file(&temp.path().join("Foo.GoTarget.g4"), "grammar FooGo;\n");
        create_file(&temp.path().join("Foo.RustTarget.g4"), "grammar FooRust;\n");
        create_file(
            &temp.path().join("pom.xml"),
            &pom("<include>Foo.g4</include>"),
        );

        let reader = DescriptorReader::new(ReaderOptions {
            target_variants: vec!["RustTarget".to_string(), "GoTarget".to_string()],
        });
        let parsed = reader.read(&temp.path().join("pom.xml")).unwrap();
        assert_eq!(parsed.project.grammars[0].name, "FooRust");

        let reader = DescriptorReader::new(ReaderOptions {
            target_variants: vec![],
        });
        let parsed = reader.read(&temp.path().join("pom.xml")).unwrap();
        assert_eq!(parsed.project.grammars[0].name, "Foo");
    }

    #[test]
    fn test_missing_grammar_is_warning() {
        let temp = TempDir::new().unwrap();
        create_file(&temp.path().join("FooLexer.g4"), "lexer grammar FooLexer;\n");
        create_file(
            &temp.path().join("pom.xml"),
            &pom(
                "<grammarName>Foo</grammarName>
  <include>FooParser.g4</include>
  <include>FooLexer.g4</include>",
            ),
        );

        let pom_path = temp.path().join("pom.xml");
        let parsed = parse_descriptor(&pom_path).unwrap();

        assert_eq!(
            parsed.warnings,
            vec![Warning::MissingGrammar {
                path: temp.path().join("FooParser.g4"),
                descriptor: pom_path,
            }]
        );
        assert_eq!(parsed.project.includes, vec![temp.path().join("FooLexer.g4")]);
        assert_eq!(parsed.project.grammars.len(), 1);
        assert_eq!(parsed.project.long_name.as_deref(), Some("Foo"));
    }

    #[test]
    fn test_unparsable_grammar_stays_in_includes() {
        let temp = TempDir::new().unwrap();
        create_file(&temp.path().join("Empty.g4"), "// nothing here\n");
        create_file(
            &temp.path().join("pom.xml"),
            &pom("<include>Empty.g4</include>"),
        );

        let parsed = parse_descriptor(&temp.path().join("pom.xml")).unwrap();

        assert_eq!(parsed.project.includes, vec![temp.path().join("Empty.g4")]);
        assert!(parsed.project.grammars.is_empty());
        assert_eq!(parsed.warnings.len(), 1);
        assert!(matches!(
            parsed.warnings[0],
            Warning::UnparsableGrammar { .. }
        ));
    }

    #[test]
    fn test_duplicate_include_ignored() {
        let temp = TempDir::new().unwrap();
        create_file(&temp.path().join("Foo.g4"), "grammar Foo;\n");
        create_file(
            &temp.path().join("pom.xml"),
            &pom(
                "<include>Foo.g4</include>
  <include>Foo.g4</include>",
            ),
        );

        let parsed = parse_descriptor(&temp.path().join("pom.xml")).unwrap();

        assert_eq!(parsed.project.includes.len(), 1);
        assert_eq!(parsed.project.grammars.len(), 1);
        assert!(parsed.warnings.is_empty());
    }

    #[test]
    fn test_respelled_include_is_same_file() {
        let temp = TempDir::new().unwrap();
        create_file(&temp.path().join("Foo.g4"), "grammar Foo;\n");
        create_file(
            &temp.path().join("pom.xml"),
            &pom(
                "<include>Foo.g4</include>
  <include>sub/../Foo.g4</include>
  <include>./Foo.g4</include>",
            ),
        );

        let parsed = parse_descriptor(&temp.path().join("pom.xml")).unwrap();

        assert_eq!(parsed.project.includes, vec![temp.path().join("Foo.g4")]);
        assert_eq!(parsed.project.grammars.len(), 1);
        assert!(parsed.warnings.is_empty());
    }

    #[test]
    fn test_duplicate_grammar_type_is_warning() {
        let temp = TempDir::new().unwrap();
        create_file(&temp.path().join("ALexer.g4"), "lexer grammar ALexer;\n");
        create_file(&temp.path().join("BLexer.g4"), "lexer grammar BLexer;\n");
        create_file(
            &temp.path().join("pom.xml"),
            &pom(
                "<include>ALexer.g4</include>
  <include>BLexer.g4</include>",
            ),
        );

        let parsed = parse_descriptor(&temp.path().join("pom.xml")).unwrap();

        assert_eq!(parsed.project.includes.len(), 2);
        assert_eq!(parsed.project.grammars.len(), 1);
        assert_eq!(
            parsed.warnings,
            vec![Warning::DuplicateGrammarType {
                path: temp.path().join("BLexer.g4"),
                kind: GrammarType::Lexer,
                existing: "ALexer".to_string(),
            }]
        );
    }

    #[test]
    fn test_example_files() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("json");
        create_file(&dir.join("examples").join("b.json"), "{}");
        create_file(&dir.join("examples").join("a.json"), "[]");
        create_file(
            &dir.join("pom.xml"),
            &pom("<exampleFiles>examples/</exampleFiles>"),
        );

        let parsed = parse_descriptor(&dir.join("pom.xml")).unwrap();
        let project = parsed.project;

        assert_eq!(
            project.examples,
            vec![
                dir.join("examples").join("a.json"),
                dir.join("examples").join("b.json"),
            ]
        );
        assert_eq!(project.example_root, Some(example_root(&dir)));
    }

    #[test]
    fn test_example_files_missing_directory() {
        let temp = TempDir::new().unwrap();
        create_file(
            &temp.path().join("pom.xml"),
            &pom("<exampleFiles>nowhere</exampleFiles>"),
        );

        let parsed = parse_descriptor(&temp.path().join("pom.xml")).unwrap();

        assert!(parsed.project.examples.is_empty());
        assert!(parsed.project.example_root.is_some());
    }

    #[test]
    fn test_malformed_example_pattern_is_glob_error() {
        let xml = pom("<exampleFiles>examples/[</exampleFiles>");
        let err = read_str(&xml, Path::new("pom.xml")).unwrap_err();

        assert!(matches!(err, DescriptorError::Glob { .. }));
    }

    #[test]
    fn test_parse_is_deterministic() {
        let temp = TempDir::new().unwrap();
        create_file(&temp.path().join("FooParser.g4"), "parser grammar FooParser;\n");
        create_file(&temp.path().join("FooLexer.g4"), "lexer grammar FooLexer;\n");
        create_file(&temp.path().join("examples").join("1.txt"), "x");
        create_file(
            &temp.path().join("pom.xml"),
            &pom(
                "<include>FooParser.g4</include>
  <include>FooLexer.g4</include>
  <include>Missing.g4</include>
  <exampleFiles>examples</exampleFiles>",
            ),
        );

        let first = parse_descriptor(&temp.path().join("pom.xml")).unwrap();
        let second = parse_descriptor(&temp.path().join("pom.xml")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_warning_display() {
        let warning = Warning::MissingGrammar {
            path: PathBuf::from("json/JSON.g4"),
            descriptor: PathBuf::from("json/pom.xml"),
        };
        assert_eq!(
            warning.to_string(),
            "missing grammar json/JSON.g4 referenced in json/pom.xml"
        );

        let warning = Warning::DuplicateGrammarType {
            path: PathBuf::from("B.g4"),
            kind: GrammarType::Lexer,
            existing: "ALexer".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "ignoring grammar B.g4: project already has LEXER grammar ALexer"
        );
    }
}
