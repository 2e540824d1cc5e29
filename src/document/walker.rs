//! Page-tree walking and content-stream interpretation.
//!
//! The walker recurses a document's page tree, maintains the inherited
//! resource stack, builds per-scope font tables, and runs the content-stream
//! interpreter over each page's streams, firing receiver callbacks along the
//! way. Form XObjects reached through `Do` recurse through the same
//! machinery with their own resources pushed.

use crate::document::xref::Xref;
use crate::error::{PdfError, Result};
use crate::font::{FontMap, build_font_map};
use crate::interp::operators::{Callback, OPERATOR_TABLE};
use crate::interp::receiver::{Receiver, dispatch};
use crate::model::{Dict, Object};
use crate::parser::lexer::{ContentLexer, Token};
use crate::utils::decode_strings_dict;

/// Walks one document and feeds a receiver.
///
/// Single-threaded and synchronous; the resource stack, the operand stack
/// and the current font are instance-local, so use one walker per document.
pub struct Walker<'a, R: Receiver> {
    xref: &'a Xref,
    receiver: &'a mut R,
    resources: Vec<Dict>,
}

impl<'a, R: Receiver> Walker<'a, R> {
    /// Create a walker over `xref`, delivering events to `receiver`.
    pub fn new(xref: &'a Xref, receiver: &'a mut R) -> Self {
        Self {
            xref,
            receiver,
            resources: Vec::new(),
        }
    }

    /// Current resource-stack depth, for balance assertions in tests.
    pub fn resource_depth(&self) -> usize {
        self.resources.len()
    }

    /// Fire the document-level metadata callbacks.
    ///
    /// Emits `pdf_version`, the decoded `metadata` dictionary (when
    /// non-empty), `xml_metadata` from the catalog's `Metadata` stream, and
    /// `page_count`. Every missing or undecodable piece is skipped silently.
    pub fn metadata(&mut self, root: &Dict, info: Option<&Dict>) {
        self.receiver.pdf_version(self.xref.pdf_version());

        if let Some(info) = info {
            let decoded = decode_strings_dict(info);
            if !decoded.is_empty() {
                self.receiver.metadata(&decoded);
            }
        }

        if let Some(entry) = root.get("Metadata") {
            match self.xref.object(entry) {
                Object::Stream(stream) => match stream.unfiltered_data() {
                    Ok(data) => self.receiver.xml_metadata(&data),
                    Err(err) => log::debug!("skipping undecodable XML metadata stream: {err}"),
                },
                other => log::debug!("Metadata entry is not a stream ({})", other.type_name()),
            }
        }

        if let Some(pages) = root.get("Pages")
            && let Object::Dict(pages) = self.xref.object(pages)
            && let Some(count) = pages.get("Count")
            && let Object::Int(count) = self.xref.object(count)
        {
            self.receiver.page_count(count);
        }
    }

    /// Walk the whole document: `begin_document`, the page tree, and
    /// `end_document`. The resource stack is empty again on return, on the
    /// error path included.
    pub fn document(&mut self, root: &Dict) -> Result<()> {
        self.receiver.begin_document(root);
        if let Some(pages) = root.get("Pages") {
            self.walk_pages(pages)?;
        }
        self.receiver.end_document();
        Ok(())
    }

    /// Recurse one page-tree node. Containers (`Pages`) push their resources
    /// around their kids; leaves (`Page`) run the interpreter. Unknown node
    /// types are ignored.
    fn walk_pages(&mut self, node: &Object) -> Result<()> {
        let node = match self.xref.object(node) {
            Object::Dict(dict) => dict,
            other => {
                log::debug!("skipping page-tree node of type {}", other.type_name());
                return Ok(());
            }
        };

        match node.get("Type").and_then(|t| t.as_name().ok()) {
            Some("Pages") => self.walk_page_container(&node),
            Some("Page") => self.walk_page(&node),
            other => {
                log::debug!("ignoring page-tree node with Type {other:?}");
                Ok(())
            }
        }
    }

    fn walk_page_container(&mut self, node: &Dict) -> Result<()> {
        self.receiver.begin_page_container(node);
        let pushed = self.push_resources(node);
        let result = self.walk_kids(node);
        if pushed {
            self.resources.pop();
        }
        result?;
        self.receiver.end_page_container();
        Ok(())
    }

    fn walk_kids(&mut self, node: &Dict) -> Result<()> {
        if let Some(kids) = node.get("Kids")
            && let Object::Array(kids) = self.xref.object(kids)
        {
            for kid in &kids {
                self.walk_pages(kid)?;
            }
        }
        Ok(())
    }

    fn walk_page(&mut self, node: &Dict) -> Result<()> {
        self.receiver.begin_page(node);
        let pushed = self.push_resources(node);
        let result = self.walk_page_content(node);
        if pushed {
            self.resources.pop();
        }
        result?;
        self.receiver.end_page();
        Ok(())
    }

    fn walk_page_content(&mut self, node: &Dict) -> Result<()> {
        let merged = Object::Dict(self.current_resources());
        let fonts = self.walk_resources(&merged);

        for data in self.page_content_streams(node)? {
            self.content_stream(&data, &fonts)?;
        }
        Ok(())
    }

    /// Normalize `Contents` to an ordered list of decoded stream payloads.
    /// It may be a single stream or an array of streams; anything else
    /// contributes nothing.
    fn page_content_streams(&self, node: &Dict) -> Result<Vec<Vec<u8>>> {
        let Some(contents) = node.get("Contents") else {
            return Ok(Vec::new());
        };
        match self.xref.object(contents) {
            Object::Stream(stream) => Ok(vec![stream.unfiltered_data()?]),
            Object::Array(items) => {
                let mut streams = Vec::with_capacity(items.len());
                for item in &items {
                    if let Object::Stream(stream) = self.xref.object(item) {
                        streams.push(stream.unfiltered_data()?);
                    }
                }
                Ok(streams)
            }
            other => {
                log::debug!("Contents is not a stream or array ({})", other.type_name());
                Ok(Vec::new())
            }
        }
    }

    /// Fire resource callbacks for one resource dictionary and build its
    /// font table. References inside are resolved deeply first; a
    /// non-dictionary argument is a no-op.
    fn walk_resources(&mut self, res: &Object) -> FontMap {
        let res = match self.xref.resolve_references(res) {
            Object::Dict(dict) => dict,
            _ => return FontMap::new(),
        };

        if let Some(procs) = res.get("ProcSet") {
            match procs {
                Object::Array(list) => self.receiver.resource_procset(list),
                other => log::debug!("ProcSet is not an array ({})", other.type_name()),
            }
        }
        if let Some(Object::Dict(entries)) = res.get("XObject") {
            for (name, value) in entries {
                self.receiver.resource_xobject(name, value);
            }
        }
        if let Some(Object::Dict(entries)) = res.get("ExtGState") {
            for (name, value) in entries {
                self.receiver.resource_extgstate(name, value);
            }
        }
        if let Some(Object::Dict(entries)) = res.get("ColorSpace") {
            for (name, value) in entries {
                self.receiver.resource_colorspace(name, value);
            }
        }
        if let Some(Object::Dict(entries)) = res.get("Pattern") {
            for (name, value) in entries {
                self.receiver.resource_pattern(name, value);
            }
        }

        let fonts = build_font_map(&res, self.xref);
        for (label, font) in &fonts {
            self.receiver.resource_font(label, font);
        }
        fonts
    }

    /// Recurse into the Form XObject named `label` in the current
    /// resources, as if its content stream were nested in the invoking one.
    ///
    /// The stream dictionary's `Subtype` is read without dereferencing; an
    /// indirect `Subtype` silently fails the Form check.
    fn walk_xobject_form(&mut self, label: &str) -> Result<()> {
        let merged = self.current_resources();
        let xobjects = match merged.get("XObject").map(|x| self.xref.object(x)) {
            Some(Object::Dict(d)) => d,
            _ => return Ok(()),
        };
        let Some(entry) = xobjects.get(label) else {
            log::debug!("no XObject named {label} in current resources");
            return Ok(());
        };
        let stream = match self.xref.object(entry) {
            Object::Stream(stream) => stream,
            _ => return Ok(()),
        };
        if !matches!(stream.get("Subtype"), Some(Object::Name(n)) if n == "Form") {
            return Ok(());
        }

        self.receiver.begin_form_xobject();

        let mut pushed = false;
        let fonts = match stream.get("Resources").map(|r| self.xref.object(r)) {
            Some(Object::Dict(dict)) => {
                self.resources.push(dict.clone());
                pushed = true;
                self.walk_resources(&Object::Dict(dict))
            }
            _ => FontMap::new(),
        };

        let result = stream
            .unfiltered_data()
            .and_then(|data| self.content_stream(&data, &fonts));
        if pushed {
            self.resources.pop();
        }
        result?;

        self.receiver.end_form_xobject();
        Ok(())
    }

    /// Interpret one decoded content stream.
    ///
    /// Literal tokens accumulate on the operand stack; each recognized
    /// operator consumes the whole stack atomically. Premature end-of-file
    /// from the lexer is terminal.
    fn content_stream(&mut self, data: &[u8], fonts: &FontMap) -> Result<()> {
        let mut lexer = ContentLexer::new(data, &OPERATOR_TABLE);
        let mut operands: Vec<Object> = Vec::new();
        let mut current_font: Option<String> = None;

        loop {
            let token = match lexer.next_token().map_err(eof_to_malformed)? {
                Some(token) => token,
                None => break,
            };
            match token {
                Token::Operator(callback) => {
                    if callback == Callback::SetTextFontAndSize
                        && let Some(Object::Name(label)) = operands.first()
                    {
                        current_font = Some(label.clone());
                    }

                    if callback.is_show_text()
                        && let Some(font) = current_font.as_deref().and_then(|l| fonts.get(l))
                    {
                        for operand in &mut operands {
                            *operand = font.to_utf8(operand);
                        }
                    }

                    if callback == Callback::BeginInlineImageData {
                        let entries = std::mem::take(&mut operands);
                        let dict = ContentLexer::pair_entries(entries);
                        let data = lexer.read_inline_data(b"EI").map_err(eof_to_malformed)?;
                        operands = vec![Object::Dict(dict), Object::String(data)];
                    }

                    dispatch(self.receiver, callback, &operands);

                    if callback == Callback::InvokeXobject {
                        let label = operands
                            .first()
                            .and_then(|o| o.as_name().ok())
                            .map(str::to_owned);
                        operands.clear();
                        if let Some(label) = label {
                            self.walk_xobject_form(&label)?;
                        }
                    } else {
                        operands.clear();
                    }
                }
                Token::Object(obj) => operands.push(obj),
                // Bare keywords the operator table does not know accumulate
                // as operands and ride into the next recognized operator.
                Token::Other(bytes) => {
                    operands.push(Object::Name(String::from_utf8_lossy(&bytes).into_owned()));
                }
            }
        }
        Ok(())
    }

    /// Push `node`'s resolved `Resources` if present; true when pushed.
    fn push_resources(&mut self, node: &Dict) -> bool {
        if let Some(res) = node.get("Resources")
            && let Object::Dict(dict) = self.xref.object(res)
        {
            self.resources.push(dict);
            return true;
        }
        false
    }

    /// Shallow merge of the resource stack, later entries winning per key.
    fn current_resources(&self) -> Dict {
        let mut merged = Dict::new();
        for entry in &self.resources {
            for (key, value) in entry {
                merged.insert(key.clone(), value.clone());
            }
        }
        merged
    }
}

fn eof_to_malformed(err: PdfError) -> PdfError {
    match err {
        PdfError::UnexpectedEof => {
            PdfError::MalformedPdf("End Of File while processing a content stream".into())
        }
        other => other,
    }
}
