use externals_common::{
  AliasOptions, Command, Enforce, ExternalsMap, ExternalsOptions, ModuleId, ModuleType,
  NormalizedOptions, ResolveConfig,
};
use externals_ecmascript::{extract_specifiers, ModuleLexer};
use externals_error::{BuildResult, ExternalsError};
use externals_fs::{FileSystem, OsFileSystem};
use externals_sourcemap::{EditBuffer, EditOutput, OutputOptions};

use crate::{
  dev_cache::{cache_dir, materialize_stubs},
  filter::should_rewrite,
  module_name::ModuleNameResolver,
  require::RequireRewriter,
  rewrite::render_specifiers,
  types::transform_output::TransformOutput,
  utils::normalize_options::normalize_options,
};

/// Rewrites references to external modules into reads of globals the page already provides.
pub struct ExternalsPlugin<F: FileSystem = OsFileSystem> {
  externals: ExternalsMap,
  options: NormalizedOptions,
  resolver: ModuleNameResolver,
  require_rewriter: RequireRewriter,
  fs: F,
}

impl ExternalsPlugin {
  pub fn new(externals: ExternalsMap, options: ExternalsOptions) -> BuildResult<Self> {
    Self::with_fs(externals, options, OsFileSystem)
  }
}

impl<F: FileSystem> ExternalsPlugin<F> {
  pub fn with_fs(externals: ExternalsMap, options: ExternalsOptions, fs: F) -> BuildResult<Self> {
    let options = normalize_options(options);
    let resolver = ModuleNameResolver::new(options.use_window);
    let require_rewriter = RequireRewriter::new(&externals, resolver)?;
    Ok(Self { externals, options, resolver, require_rewriter, fs })
  }

  #[allow(clippy::unused_self)]
  pub fn name(&self) -> &'static str {
    "externals"
  }

  pub fn enforce(&self) -> Option<Enforce> {
    self.options.enforce
  }

  pub fn options(&self) -> &NormalizedOptions {
    &self.options
  }

  pub fn fs(&self) -> &F {
    &self.fs
  }

  /// Serve-only hook. Regenerates the stub cache and appends an exact-match alias per external
  /// to the host's existing aliases.
  pub fn config(
    &self,
    command: Command,
    alias: Option<AliasOptions>,
  ) -> BuildResult<Option<ResolveConfig>> {
    if command.is_build() || self.options.disable_in_serve || self.externals.is_empty() {
      return Ok(None);
    }
    let mut aliases = alias.unwrap_or_default().into_list();
    let cache_dir = cache_dir(&self.options.cwd);
    aliases.extend(materialize_stubs(&self.fs, &cache_dir, &self.externals, self.resolver)?);
    Ok(Some(ResolveConfig { alias: aliases }))
  }

  /// Returns `None` when the module is left as is, including when rewriting it failed.
  pub async fn transform(
    &self,
    code: &str,
    id: &str,
    ssr: bool,
    is_build: bool,
  ) -> Option<TransformOutput> {
    if !is_build && self.options.disable_in_serve {
      return None;
    }
    if !should_rewrite(&self.options, code, id, is_build, ssr) {
      return None;
    }
    let lexer = ModuleLexer::init().await;
    match self.rewrite_module(lexer, code, id, is_build) {
      Ok(output) => output,
      Err(err) => {
        if self.options.debug {
          tracing::error!(target: "externals", id, "Failed to rewrite module: {err:#}");
        }
        None
      }
    }
  }

  fn rewrite_module(
    &self,
    lexer: &ModuleLexer,
    code: &str,
    id: &str,
    is_build: bool,
  ) -> anyhow::Result<Option<TransformOutput>> {
    let module_id = ModuleId::from(id);
    let mut edits = EditBuffer::new(code);

    if is_build && module_id.is_in_dependency_tree() {
      for (span, expr) in self.require_rewriter.find_iter(code) {
        edits.overwrite(span, expr)?;
      }
    }

    let source_type = module_id.module_type().unwrap_or(ModuleType::Js).source_type();
    lexer.scan_with(code, source_type, |records| -> Result<(), ExternalsError> {
      for record in records {
        let Some(value) = self.externals.get(record.specifier) else {
          continue;
        };
        let statement = record.span.source_text(code);
        match extract_specifiers(statement, source_type) {
          Ok(specifiers) if specifiers.is_empty() => {}
          Ok(specifiers) => {
            let expr = self.resolver.resolve(value);
            edits.overwrite(record.span, render_specifiers(&specifiers, &expr))?;
          }
          Err(err) if err.is_statement_level() => {
            tracing::debug!(
              target: "externals",
              id,
              statement,
              kind = %record.kind,
              reason = %err,
              "Statement left untouched"
            );
          }
          Err(err) => return Err(err),
        }
      }
      Ok(())
    })??;

    let source_map = &self.options.source_map;
    let output_options = OutputOptions {
      source_name: source_map.source.as_deref().unwrap_or(id),
      file: source_map.file.as_deref(),
      hires: self.options.hires(),
    };
    let output = edits.into_output(&output_options);
    Ok(output.map(|EditOutput { code, map }| TransformOutput { code, map }))
  }
}
