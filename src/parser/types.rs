use crate::renderer::TreeLike;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One markup element: a name, its attributes in source order, its child
/// elements in document order, and the text held directly by the element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeNode {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<TreeNode>,
    pub text: String,
}

impl TreeNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(name, value));
        self
    }

    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// First child with the given name, in document order.
    pub fn child(&self, name: &str) -> Option<&TreeNode> {
        self.children.iter().find(|child| child.name == name)
    }
}

impl TreeLike for TreeNode {
    type Child = TreeNode;

    fn name(&self) -> &str {
        &self.name
    }

    fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    fn children(&self) -> &[TreeNode] {
        &self.children
    }

    fn text(&self) -> &str {
        &self.text
    }
}

/// Unnamed root of a parsed document. Its children are the top-level elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub children: Vec<TreeNode>,
}

impl Document {
    pub fn new(children: Vec<TreeNode>) -> Self {
        Self { children }
    }

    /// Follows a dot-separated element path from the root, taking the first
    /// match at each step.
    pub fn find(&self, path: &str) -> Option<&TreeNode> {
        let mut steps = path.split('.');
        let first = steps.next()?;
        let mut node = self.children.iter().find(|child| child.name == first)?;
        for step in steps {
            node = node.child(step)?;
        }
        Some(node)
    }
}

impl TreeLike for Document {
    type Child = TreeNode;

    fn name(&self) -> &str {
        ""
    }

    fn attributes(&self) -> &[Attribute] {
        &[]
    }

    fn children(&self) -> &[TreeNode] {
        &self.children
    }

    fn text(&self) -> &str {
        ""
    }
}
