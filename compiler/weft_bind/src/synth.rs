//! The description walk.

use std::sync::Arc;

use weft_ir::{BindingDecl, CodeArena, CodeId, CodeRef, Description, SharedNamespace, TreePath};

use crate::stack::ensure_sufficient_stack;
use crate::{BindingFunc, ExprFunction, StructuralError, SynthesizedBinding, SynthesizedNode};

/// Validated shape of a binding's code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BindingCode {
    /// `name = expr`: one unit producing the value.
    Read(CodeId),
    /// `name := expr`: a subscription unit and an update unit.
    Delegate { subscribe: CodeId, update: CodeId },
}

impl BindingCode {
    /// Classify a compiler code reference; `None` for tuples that are not
    /// pairs.
    pub fn classify(code: &CodeRef) -> Option<Self> {
        match code {
            CodeRef::Unit(id) => Some(BindingCode::Read(*id)),
            CodeRef::Tuple(ids) => match ids.as_slice() {
                [subscribe, update] => Some(BindingCode::Delegate {
                    subscribe: *subscribe,
                    update: *update,
                }),
                _ => None,
            },
        }
    }
}

/// Synthesize the callables of every binding in `description`.
///
/// Every function created shares `namespace`; units are resolved in `code`.
/// The input tree is only read. Nodes are visited once, depth-first, each
/// node's bindings before its children.
#[tracing::instrument(level = "debug", skip_all, fields(
    units = code.len(),
    module = namespace.module_name()
))]
pub fn synthesize(
    description: &Description,
    code: &CodeArena,
    namespace: &SharedNamespace,
) -> Result<SynthesizedNode, StructuralError> {
    let synthesizer = Synthesizer { code, namespace };
    let tree = synthesizer.node(description, &mut TreePath::root())?;
    tracing::debug!(bindings = tree.binding_count(), "binding synthesis complete");
    Ok(tree)
}

struct Synthesizer<'a> {
    code: &'a CodeArena,
    namespace: &'a SharedNamespace,
}

impl Synthesizer<'_> {
    fn node(
        &self,
        description: &Description,
        path: &mut TreePath,
    ) -> Result<SynthesizedNode, StructuralError> {
        ensure_sufficient_stack(|| -> Result<SynthesizedNode, StructuralError> {
            let bindings = description
                .bindings
                .iter()
                .enumerate()
                .map(|(index, decl)| self.binding(decl, index, &*path))
                .collect::<Result<Vec<_>, _>>()?;

            // One path for the whole walk; errors clone it when they need it.
            let mut children = Vec::with_capacity(description.children.len());
            for (index, child) in description.children.iter().enumerate() {
                path.push(index);
                let node = self.node(child, path);
                path.pop();
                children.push(node?);
            }

            Ok(SynthesizedNode::new(
                bindings,
                children,
                description.doc.clone(),
            ))
        })
    }

    fn binding(
        &self,
        decl: &BindingDecl,
        index: usize,
        path: &TreePath,
    ) -> Result<SynthesizedBinding, StructuralError> {
        let name = match decl.name.as_deref() {
            None => {
                return Err(StructuralError::MissingName {
                    path: path.clone(),
                    index,
                })
            }
            Some("") => {
                return Err(StructuralError::EmptyName {
                    path: path.clone(),
                    index,
                })
            }
            Some(name) => name,
        };

        let code_ref = decl
            .code
            .as_ref()
            .ok_or_else(|| StructuralError::MissingCode {
                path: path.clone(),
                name: name.to_string(),
            })?;

        let code =
            BindingCode::classify(code_ref).ok_or_else(|| StructuralError::InvalidCodeShape {
                path: path.clone(),
                name: name.to_string(),
                arity: code_ref.arity(),
            })?;

        let name: Arc<str> = Arc::from(name);
        let func = match code {
            BindingCode::Read(id) => BindingFunc::read(self.function(&name, id, path)?),
            BindingCode::Delegate { subscribe, update } => BindingFunc::delegate(
                self.function(&name, subscribe, path)?,
                self.function(&name, update, path)?,
            ),
        };

        tracing::trace!(%path, %name, delegate = func.is_delegate(), "synthesized binding");
        Ok(SynthesizedBinding::new(name, code, func))
    }

    fn function(
        &self,
        name: &Arc<str>,
        id: CodeId,
        path: &TreePath,
    ) -> Result<ExprFunction, StructuralError> {
        let unit = self.code.get(id).ok_or_else(|| StructuralError::UnknownCode {
            path: path.clone(),
            name: name.to_string(),
            code: id,
        })?;
        Ok(ExprFunction::new(
            Arc::clone(name),
            Arc::clone(unit),
            Arc::clone(self.namespace),
        ))
    }
}
