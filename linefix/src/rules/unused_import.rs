use super::patterns::ident;
use super::{Category, Rule};
use crate::constants::{get_empty_named_imports_re, get_import_cleanup_res};
use crate::fix::{Edit, LineRewriter};
use regex::Regex;

/// Optional `type` modifier and `Original as` alias in front of a binding.
const SPECIFIER_PREFIX: &str = r"(?:type\s+)?(?:[\w$]+\s+as\s+)?";

/// Removes an unused import binding named by the entry's detail.
///
/// In order:
/// 1. `import { Foo } from '...'` (the only named binding) blanks the line;
/// 2. `import Foo from '...'` and `import * as Foo from '...'` blank the line;
/// 3. `import Foo, { Bar } from '...'` drops the default binding;
/// 4. otherwise `Foo` is cut out of the `{ ... }` list together with one
///    adjacent comma and the list is tidied;
/// 5. a brace-less line holding just `Foo,` (the body of a multi-line
///    import) is blanked.
///
/// On the opening line of a multi-line import the list runs to the end of
/// the line. A trailing `\r` is kept.
///
/// A blanked line stays in the document so later line numbers hold.
pub struct UnusedImportRule;

impl UnusedImportRule {
    fn only_named_binding(line: &str, id: &str) -> Option<bool> {
        let re = Regex::new(&format!(
            r"^\s*import\s+(?:type\s+)?\{{\s*{SPECIFIER_PREFIX}{id}\s*,?\s*\}}"
        ))
        .ok()?;
        Some(re.is_match(line))
    }

    fn whole_default_import(line: &str, id: &str) -> Option<bool> {
        let re = Regex::new(&format!(
            r"^\s*import\s+(?:type\s+)?(?:\*\s*as\s+)?{id}\s+from\b"
        ))
        .ok()?;
        Some(re.is_match(line))
    }

    fn drop_default_binding(line: &str, id: &str) -> Option<String> {
        let re = Regex::new(&format!(r"^(\s*import\s+)(?:type\s+)?{id}\s*,\s*(\{{)")).ok()?;
        let caps = re.captures(line)?;
        let whole = caps.get(0)?;
        let keep = format!("{}{}", caps.get(1)?.as_str(), caps.get(2)?.as_str());

        let mut rewriter = LineRewriter::new(line);
        rewriter.add_edit(Edit::from_match(&whole, keep));
        rewriter.apply().ok()
    }

    fn remove_from_list(line: &str, id: &str) -> Option<String> {
        let open = line.find('{')?;
        // The first line of a multi-line import has no closing brace.
        let close = line[open..].find('}').map(|offset| open + offset);
        let end = close.unwrap_or(line.len());
        let specifier = Regex::new(&format!(r"^\s*{SPECIFIER_PREFIX}{id}\s*$")).ok()?;

        let mut segments: Vec<String> = line[open + 1..end]
            .split(',')
            .map(str::to_owned)
            .collect();
        let index = segments.iter().position(|s| specifier.is_match(s))?;
        let was_last = index + 1 == segments.len();
        let removed = segments.remove(index);

        // Keep the list's own spacing around the braces.
        if index == 0 {
            if let Some(first) = segments.first_mut() {
                *first = format!("{}{}", leading_ws(&removed), first.trim_start());
            }
        }
        if was_last {
            if let Some(last) = segments.last_mut() {
                *last = format!("{}{}", last.trim_end(), trailing_ws(&removed));
            }
        }

        let inner = segments.join(",");
        let mut list = match close {
            Some(_) => format!("{{{inner}}}"),
            None => format!("{{{inner}"),
        };
        for (re, replacement) in get_import_cleanup_res() {
            list = re.replace_all(&list, *replacement).into_owned();
        }

        let emptied = list[1..].trim_end_matches('}').trim().is_empty();

        let mut rewriter = LineRewriter::new(line);
        rewriter.add_edit(Edit::new(open, close.map_or(end, |c| c + 1), list));
        let rewritten = rewriter.apply().ok()?;

        if !emptied || close.is_none() {
            return Some(rewritten);
        }
        let without_list = get_empty_named_imports_re().replace(&rewritten, "");
        if without_list != rewritten {
            return Some(without_list.into_owned());
        }
        if rewritten.trim_start().starts_with("import") {
            return Some(String::new());
        }
        Some(rewritten)
    }

    fn rewrite_body(line: &str, id: &str) -> Option<String> {
        if Self::only_named_binding(line, id)? || Self::whole_default_import(line, id)? {
            return Some(String::new());
        }
        if let Some(rewritten) = Self::drop_default_binding(line, id) {
            return Some(rewritten);
        }
        if line.contains('{') {
            return Self::remove_from_list(line, id);
        }
        Self::bare_specifier_line(line, id)?.then(String::new)
    }

    fn bare_specifier_line(line: &str, id: &str) -> Option<bool> {
        let re = Regex::new(&format!(r"^\s*{SPECIFIER_PREFIX}{id}\s*,?\s*$")).ok()?;
        Some(re.is_match(line))
    }
}

fn leading_ws(s: &str) -> &str {
    &s[..s.len() - s.trim_start().len()]
}

fn trailing_ws(s: &str) -> &str {
    &s[s.trim_end().len()..]
}

impl Rule for UnusedImportRule {
    fn name(&self) -> &'static str {
        "UnusedImportRule"
    }

    fn category(&self) -> Category {
        Category::UnusedImport
    }

    fn rewrite(&self, line: &str, detail: Option<&str>) -> Option<String> {
        let name = detail.filter(|name| !name.is_empty())?;
        let id = ident(name);

        // A CRLF file keeps its `\r` on every line, blanked ones included.
        let (body, eol) = match line.strip_suffix('\r') {
            Some(body) => (body, "\r"),
            None => (line, ""),
        };
        Self::rewrite_body(body, &id).map(|fixed| format!("{fixed}{eol}"))
    }
}
