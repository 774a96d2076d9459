//! Link syntax: `kind@Namespace.Path`.

use std::fmt;
use std::str::FromStr;

use super::LinkError;

/// Fragment kinds that map onto a page without a symbol index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    Alias,
    Callback,
    Class,
    Const,
    Enum,
    Error,
    Flags,
    Iface,
    Struct,
    Ctor,
    Method,
    Vfunc,
    Property,
    Signal,
    Func,
}

impl LinkKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LinkKind::Alias => "alias",
            LinkKind::Callback => "callback",
            LinkKind::Class => "class",
            LinkKind::Const => "const",
            LinkKind::Enum => "enum",
            LinkKind::Error => "error",
            LinkKind::Flags => "flags",
            LinkKind::Iface => "iface",
            LinkKind::Struct => "struct",
            LinkKind::Ctor => "ctor",
            LinkKind::Method => "method",
            LinkKind::Vfunc => "vfunc",
            LinkKind::Property => "property",
            LinkKind::Signal => "signal",
            LinkKind::Func => "func",
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LinkKind {
    type Err = LinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "alias" => LinkKind::Alias,
            "callback" => LinkKind::Callback,
            "class" => LinkKind::Class,
            "const" => LinkKind::Const,
            "enum" => LinkKind::Enum,
            "error" => LinkKind::Error,
            "flags" => LinkKind::Flags,
            "iface" => LinkKind::Iface,
            "struct" => LinkKind::Struct,
            "ctor" => LinkKind::Ctor,
            "method" => LinkKind::Method,
            "vfunc" => LinkKind::Vfunc,
            "property" => LinkKind::Property,
            "signal" => LinkKind::Signal,
            "func" => LinkKind::Func,
            other => return Err(LinkError::UnknownKind(other.to_string())),
        })
    }
}

/// A parsed documentation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub kind: LinkKind,
    pub namespace: String,
    /// Type owning the member (methods, properties, type functions...).
    pub owner: Option<String>,
    pub name: String,
}

impl Link {
    pub fn parse(link: &str) -> Result<Link, LinkError> {
        let (kind, rest) = link
            .split_once('@')
            .ok_or_else(|| LinkError::MissingKind(link.to_string()))?;
        let kind: LinkKind = kind.parse()?;
        let malformed = |reason: &str| LinkError::Malformed {
            link: link.to_string(),
            reason: reason.to_string(),
        };

        let (parts, member) = match kind {
            LinkKind::Signal => {
                let (head, name) = rest
                    .split_once("::")
                    .ok_or_else(|| malformed("expected Namespace.Type::signal"))?;
                (split_dotted(head), Some(name))
            }
            LinkKind::Property => {
                let (head, name) = rest
                    .split_once(':')
                    .ok_or_else(|| malformed("expected Namespace.Type:property"))?;
                (split_dotted(head), Some(name))
            }
            _ => (split_dotted(rest), None),
        };

        if parts.iter().any(|p| p.is_empty()) || member.is_some_and(str::is_empty) {
            return Err(malformed("empty path component"));
        }
        // The member separator is the only ':' a link may contain.
        if parts.iter().chain(member.iter()).any(|p| p.contains(':')) {
            return Err(malformed("unexpected ':' in path"));
        }

        let (namespace, owner, name) = match (kind, parts.as_slice(), member) {
            (LinkKind::Signal | LinkKind::Property, [ns, owner], Some(name)) => {
                (*ns, Some(*owner), name)
            }
            (LinkKind::Signal | LinkKind::Property, _, _) => {
                return Err(malformed("expected Namespace.Type before the member"))
            }
            (LinkKind::Ctor | LinkKind::Method | LinkKind::Vfunc, [ns, owner, name], None) => {
                (*ns, Some(*owner), *name)
            }
            (LinkKind::Ctor | LinkKind::Method | LinkKind::Vfunc, _, _) => {
                return Err(malformed("expected Namespace.Type.member"))
            }
            (LinkKind::Func, [ns, name], None) => (*ns, None, *name),
            (LinkKind::Func, [ns, owner, name], None) => (*ns, Some(*owner), *name),
            (LinkKind::Func, _, _) => {
                return Err(malformed("expected Namespace.function or Namespace.Type.function"))
            }
            (_, [ns, name], None) => (*ns, None, *name),
            _ => return Err(malformed("expected Namespace.Name")),
        };

        Ok(Link {
            kind,
            namespace: namespace.to_string(),
            owner: owner.map(str::to_string),
            name: name.to_string(),
        })
    }

    /// Page name relative to the namespace's base URL.
    pub fn page(&self) -> String {
        match (self.kind, &self.owner) {
            (LinkKind::Func, Some(owner)) => format!("type_func.{owner}.{}.html", self.name),
            (kind, Some(owner)) => format!("{kind}.{owner}.{}.html", self.name),
            (kind, None) => format!("{kind}.{}.html", self.name),
        }
    }
}

impl FromStr for Link {
    type Err = LinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Link::parse(s)
    }
}

fn split_dotted(s: &str) -> Vec<&str> {
    s.split('.').collect()
}
