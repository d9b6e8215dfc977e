//! 元素注册表
//!
//! 元素（组件/子组件类型）以静态声明表的形式登记：类型名、版本、
//! 文档化的参数/端口/插槽，外加构造工厂。注册表只在配置期被构建器
//! 消费，元数据绝不影响 tick 逻辑。

use crate::comp::component::Component;
use crate::comp::id::ComponentId;
use crate::comp::params::Params;
use crate::comp::subcomp::{SlotMap, SubComponent};
use crate::comp::{counting::CountingComponent, even_odd};
use crate::error::ConfigError;
use crate::link::{LinkTable, Ports};
use crate::sim::Kernel;

/// 参数文档项：名称、说明、默认值。
#[derive(Debug, Clone, Copy)]
pub struct ParamDoc {
    pub name: &'static str,
    pub description: &'static str,
    pub default: &'static str,
}

/// 端口文档项。
#[derive(Debug, Clone, Copy)]
pub struct PortDoc {
    pub name: &'static str,
    pub description: &'static str,
}

/// 插槽文档项。
#[derive(Debug, Clone, Copy)]
pub struct SlotDoc {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: &'static str,
}

/// 元素的静态声明表。
#[derive(Debug, Clone, Copy)]
pub struct ElementDoc {
    pub kind: &'static str,
    pub version: [u32; 3],
    pub description: &'static str,
    pub params: &'static [ParamDoc],
    pub ports: &'static [PortDoc],
    pub slots: &'static [SlotDoc],
}

/// 组件工厂：构造组件并完成其时钟/主组件注册与端口领取。
pub type ComponentFactory = fn(
    id: ComponentId,
    name: &str,
    params: &Params,
    ports: &mut Ports,
    slots: &SlotMap,
    registry: &Registry,
    links: &mut LinkTable,
    kernel: &mut Kernel,
) -> Result<Box<dyn Component>, ConfigError>;

/// 子组件工厂：以父组件 id 构造，随后由父组件调用 `start`。
pub type SubComponentFactory = fn(parent: ComponentId) -> Box<dyn SubComponent>;

/// 元素注册表。
pub struct Registry {
    components: Vec<(ElementDoc, ComponentFactory)>,
    subcomponents: Vec<(ElementDoc, SubComponentFactory)>,
}

impl Registry {
    pub fn empty() -> Registry {
        Registry {
            components: Vec::new(),
            subcomponents: Vec::new(),
        }
    }

    /// 带全部内建元素的注册表。
    pub fn builtin() -> Registry {
        let mut r = Registry::empty();
        r.register_component(CountingComponent::DOC, CountingComponent::build);
        r.register_component(even_odd::COMPONENT_DOC, even_odd::EvenOddComponent::build);
        r.register_subcomponent(even_odd::FILTER_DOC, even_odd::EvenOddFilter::create);
        r
    }

    pub fn register_component(&mut self, doc: ElementDoc, factory: ComponentFactory) {
        self.components.push((doc, factory));
    }

    pub fn register_subcomponent(&mut self, doc: ElementDoc, factory: SubComponentFactory) {
        self.subcomponents.push((doc, factory));
    }

    pub fn component_factory(&self, kind: &str) -> Result<ComponentFactory, ConfigError> {
        self.components
            .iter()
            .find(|(doc, _)| doc.kind == kind)
            .map(|(_, f)| *f)
            .ok_or_else(|| ConfigError::UnknownKind(kind.to_string()))
    }

    pub fn subcomponent_factory(&self, kind: &str) -> Result<SubComponentFactory, ConfigError> {
        self.subcomponents
            .iter()
            .find(|(doc, _)| doc.kind == kind)
            .map(|(_, f)| *f)
            .ok_or_else(|| ConfigError::UnknownKind(kind.to_string()))
    }

    /// 全部元素声明表（`--list` 输出用）。
    pub fn docs(&self) -> impl Iterator<Item = &ElementDoc> {
        self.components
            .iter()
            .map(|(doc, _)| doc)
            .chain(self.subcomponents.iter().map(|(doc, _)| doc))
    }
}
